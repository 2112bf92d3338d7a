// src/noyau/format.rs
//
// Opérande → texte décimal.
// - précision figée : 6 décimales maximum, zéros finaux retirés
// - fonction pure, pas d’objet formateur ni d’état partagé
// - séparateur décimal : le point, sans locale

/// Décimales maximum à l’affichage d’un opérande.
const DECIMALES_MAX: usize = 6;

/// Formate un opérande en texte décimal ("100", "2.5", "0.123457").
///
/// Les non-finis (NaN/inf) passent tels quels : le moteur ne masque pas
/// les cas dégénérés, le texte non plus.
pub fn format_operande(valeur: f64) -> String {
    let mut texte = format!("{valeur:.prec$}", prec = DECIMALES_MAX);

    if texte.contains('.') {
        while texte.ends_with('0') {
            texte.pop();
        }
        if texte.ends_with('.') {
            texte.pop();
        }
    }

    texte
}
