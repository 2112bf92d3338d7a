// src/noyau/operations.rs
//
// Registre des opérations : symbole → comportement.
// -------------------------------------------------
// - Constante    : valeur fixe, décrite par le symbole lui-même (π, e)
// - SansOperande : générateur sans opérande (Rand)
// - Unaire       : appliquée immédiatement sur l’accumulateur courant
// - Binaire      : capturée, en attente du second opérande
// - Egal         : "=" force la résolution de l’opération en attente
//
// Le registre est figé : un match pur, un comportement par symbole.
// Symbole inconnu => None (le moteur journalise puis ignore, voir moteur.rs).
//
// NOTE: la touche soustraction est "−" (U+2212), pas le trait d’union "-".

use std::f64::consts::{E, PI};

/// Comportement lié à un symbole du registre.
///
/// Ensemble fermé : une variante par arité, dispatch par match exhaustif.
/// Les comportements sont des pointeurs de fonction, sans capture : le
/// registre ne porte aucun état.
#[derive(Clone, Copy)]
pub enum Operation {
    /// Valeur fixe ; la description est le symbole lui-même.
    Constante(f64),
    /// (tirage, description) : produit une valeur sans consommer l’accumulateur.
    SansOperande(fn() -> f64, fn() -> String),
    /// (calcul, composeur) : agit sur la paire accumulateur/description courante.
    Unaire(fn(f64) -> f64, fn(&str) -> String),
    /// (calcul, composeur) : différée jusqu’au second opérande.
    Binaire(fn(f64, f64) -> f64, fn(&str, &str) -> String),
    /// Résout l’opération binaire en attente.
    Egal,
}

/// Comportement lié à `symbole`, ou None si le symbole est inconnu.
///
/// "Rand" est le seul comportement non pur du registre : tirage uniforme
/// sur [0,1). Un programme qui le contient n’est donc pas rejouable à
/// l’identique (voir programme.rs).
pub fn operation(symbole: &str) -> Option<Operation> {
    use Operation::*;

    Some(match symbole {
        "π" => Constante(PI),
        "e" => Constante(E),

        "Rand" => SansOperande(|| rand::random::<f64>(), || "Rand()".to_string()),

        "±" => Unaire(|x: f64| -x, |d: &str| format!("({d})")),
        "%" => Unaire(|x: f64| x / 100.0, |d: &str| format!("({d})%")),
        "√" => Unaire(f64::sqrt, |d: &str| format!("√({d})")),
        "∛" => Unaire(f64::cbrt, |d: &str| format!("∛({d})")),
        "cos" => Unaire(f64::cos, |d: &str| format!("cos({d})")),
        "sin" => Unaire(f64::sin, |d: &str| format!("sin({d})")),
        "tan" => Unaire(f64::tan, |d: &str| format!("tan({d})")),
        "1/x" => Unaire(|x: f64| 1.0 / x, |d: &str| format!("1/({d})")),
        "10ʸ" => Unaire(|x: f64| 10f64.powf(x), |d: &str| format!("10^({d})")),
        "x²" => Unaire(|x: f64| x.powi(2), |d: &str| format!("({d})^2")),

        "xʸ" => Binaire(f64::powf, |a: &str, b: &str| format!("{a} ^ {b}")),
        "×" => Binaire(|a: f64, b: f64| a * b, |a: &str, b: &str| format!("{a} * {b}")),
        "÷" => Binaire(|a: f64, b: f64| a / b, |a: &str, b: &str| format!("{a} / {b}")),
        "+" => Binaire(|a: f64, b: f64| a + b, |a: &str, b: &str| format!("{a} + {b}")),
        "−" => Binaire(|a: f64, b: f64| a - b, |a: &str, b: &str| format!("{a} - {b}")),

        "=" => Egal,

        _ => return None,
    })
}
