// src/pupitre.rs
//
// Calculatrice Pupitre — module pupitre (racine)
// ----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + touches.rs)
// - Ré-exporter PupitreCalc (pour lib.rs: use crate::pupitre::PupitreCalc;)
//
// Important:
// - etat.rs   : état d’affichage + saisie chiffre à chiffre, sans toucher
//               au moteur.
// - touches.rs: les touches qui pilotent le moteur (opérations, AC,
//               sauvegarde/restauration du programme).
// - Aucun rendu ici : l’hôte branche ses boutons sur ces méthodes et
//   affiche affichage()/bandeau() comme il l’entend.

pub mod etat;
pub mod touches;

// Ré-export pratique: `use crate::pupitre::PupitreCalc;`
pub use etat::PupitreCalc;
