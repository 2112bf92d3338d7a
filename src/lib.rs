// src/lib.rs
//
// Calculatrice Pupitre — moteur d’évaluation au fil des touches
// -------------------------------------------------------------
// But:
// - NOYAU   : accumulateur + opération binaire en attente
//             (enchaînement strict gauche-droite, sans précédence)
// - PUPITRE : état de pupitre sans rendu (saisie chiffre à chiffre,
//             touches, sauvegarde/rejeu du programme)
//
// IMPORTANT (structure projet):
// - Aucun rendu ici : l’application hôte branche ses boutons sur le
//   pupitre et affiche affichage()/bandeau() comme elle l’entend.
// - Le moteur seul suffit aux hôtes qui gèrent leur propre saisie :
//   pousser opérandes/symboles, relire resultat()/description().

pub mod noyau;
pub mod pupitre;

pub use noyau::{Entree, MoteurCalc, Programme};
pub use pupitre::PupitreCalc;
