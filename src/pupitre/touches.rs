// src/pupitre/touches.rs
//
// Touches qui pilotent le moteur — pupitre sans rendu
// ---------------------------------------------------
// Objectifs:
// - touche_operation : dépose l’opérande en cours de frappe (s’il se parse)
//   puis applique le symbole ; l’écran reprend le résultat formaté
// - bandeau : description + " ..." (en cours) ou " =" (résolu)
// - sauvegarde/restauration : aller-retour du programme exporté
// - clear : AC, remise à zéro totale (moteur + écran + frappe)

use crate::noyau::format::format_operande;
use crate::noyau::programme::format_programme;

use super::etat::PupitreCalc;

impl PupitreCalc {
    /// Touche opération : dépose l’opérande tapé puis applique `symbole`.
    ///
    /// Un écran non numérique (ex: "." seul) n’est pas déposé : la frappe
    /// reste ouverte et le symbole s’applique à l’accumulateur tel quel.
    pub fn touche_operation(&mut self, symbole: &str) {
        if self.en_frappe {
            if let Some(valeur) = self.valeur_affichee() {
                self.moteur.set_operande(valeur);
                self.en_frappe = false;
            }
        }

        self.moteur.applique_symbole(symbole);
        self.affichage = format_operande(self.moteur.resultat());
    }

    /// Bandeau descriptif au-dessus de l’écran.
    ///
    /// " ..." signale une expression en cours (second opérande attendu),
    /// " =" une expression résolue ; vide tant que rien n’a été décrit.
    pub fn bandeau(&self) -> String {
        let description = self.moteur.description();
        if description.is_empty() {
            return String::new();
        }

        if self.moteur.est_resultat_partiel() {
            format!("{description} ...")
        } else {
            format!("{description} =")
        }
    }

    /// Journal en texte (trace), entrées séparées par des espaces.
    pub fn journal(&self) -> String {
        format_programme(self.moteur.programme())
    }

    /// Mémorise le programme courant.
    pub fn sauvegarde(&mut self) {
        self.programme_sauve = Some(self.moteur.programme().to_vec());
    }

    /// Rejoue le programme mémorisé (no-op si rien n’a été sauvegardé).
    pub fn restauration(&mut self) {
        if let Some(programme) = self.programme_sauve.clone() {
            self.moteur.set_programme(&programme);
            self.affichage = format_operande(self.moteur.resultat());
        }
    }

    /// AC : remise à zéro totale (moteur + écran + frappe).
    pub fn clear(&mut self) {
        self.moteur.clear();
        self.affichage.clear();
        self.affichage.push('0');
        self.en_frappe = false;
    }
}

/* ------------------------ Tests ------------------------ */
