//! Noyau moteur — évaluation au fil des touches.
//!
//! Organisation interne :
//! - operations.rs : registre symbole → comportement (constantes, unaires, binaires, "=")
//! - moteur.rs     : accumulateur + opération en attente + journal
//! - programme.rs  : entrées du journal (export / rejeu / import JSON tolérant)
//! - format.rs     : opérande → texte décimal (6 décimales max)

pub mod format;
pub mod moteur;
pub mod operations;
pub mod programme;



// API publique minimale
pub use moteur::MoteurCalc;
pub use programme::{Entree, Programme};
