//! src/pupitre/etat.rs
//!
//! État du pupitre (sans rendu).
//!
//! Rôle : porter l’état visible (texte d’écran, frappe en cours, programme
//! sauvegardé) et la saisie chiffre à chiffre. Rien ici n’invoque le moteur :
//! tout ce qui le pilote vit dans touches.rs.
//!
//! Contrats :
//! - au plus un point décimal par frappe d’opérande
//! - un écran vidé par retour arrière redevient "0"
//! - actions déterministes, sans effet de bord caché

use crate::noyau::{MoteurCalc, Programme};

#[derive(Clone, Debug)]
pub struct PupitreCalc {
    // --- moteur ---
    pub moteur: MoteurCalc,

    // --- écran ---
    pub affichage: String, // texte de l’écran principal
    pub en_frappe: bool,   // un opérande est en cours de frappe

    // --- sauvegarde ---
    pub programme_sauve: Option<Programme>,
}

impl Default for PupitreCalc {
    fn default() -> Self {
        Self {
            moteur: MoteurCalc::new(),
            affichage: "0".to_string(),
            en_frappe: false,
            programme_sauve: None,
        }
    }
}

impl PupitreCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Saisie chiffre à chiffre ------------------------ */

    /// Frappe d’un chiffre (ou du point décimal).
    ///
    /// Un second point pendant la même frappe est ignoré ; hors frappe, le
    /// caractère remplace l’écran et ouvre la frappe.
    pub fn touche_chiffre(&mut self, chiffre: char) {
        if chiffre == '.' && self.en_frappe && self.affichage.contains('.') {
            return;
        }

        if self.en_frappe {
            self.affichage.push(chiffre);
        } else {
            self.affichage.clear();
            self.affichage.push(chiffre);
            self.en_frappe = true;
        }
    }

    /// Retour arrière : retire le dernier caractère tapé.
    ///
    /// Hors frappe : no-op. Un écran vidé redevient "0", la frappe reste
    /// ouverte.
    pub fn retour_arriere(&mut self) {
        if !self.en_frappe {
            return;
        }

        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage.push('0');
        }
    }

    /// Valeur numérique de l’écran, si le texte en est une.
    pub fn valeur_affichee(&self) -> Option<f64> {
        self.affichage.parse::<f64>().ok()
    }
}
