// src/noyau/moteur.rs
//
// Moteur d’évaluation au fil des touches.
// ---------------------------------------
// Séquencement :
// - set_operande(v)     : dépose v dans l’accumulateur (+ journal)
// - applique_symbole(s) : journalise, puis dispatch selon le registre
// - résolution différée : une Binaire capture l’accumulateur courant et
//   attend son second opérande ; la Binaire suivante ou "=" la résout.
//   Enchaînement strict gauche-droite : 3 + 4 × 5 = donne 35, pas 23.
//
// Contrats :
// - aucune erreur remontée : symbole inconnu journalisé puis ignoré ;
//   les cas dégénérés (÷0, √ d’un négatif) passent en inf/NaN, sans panique
// - au plus une opération en attente à la fois

use crate::noyau::format::format_operande;
use crate::noyau::operations::{operation, Operation};
use crate::noyau::programme::Entree;

/// Opération binaire capturée, en attente de son second opérande.
#[derive(Clone, Debug)]
struct OperationEnAttente {
    calcul: fn(f64, f64) -> f64,
    premier_operande: f64,
    decrit: fn(&str, &str) -> String,
    description_premier: String,
}

/// Moteur : accumulateur + description + opération en attente + journal.
///
/// Objet de session unique, mutable, sans synchronisation interne :
/// l’hôte sérialise les accès (un moteur par utilisateur logique).
#[derive(Clone, Debug, Default)]
pub struct MoteurCalc {
    accumulateur: f64,
    description_accumulateur: String,
    en_attente: Option<OperationEnAttente>,
    programme: Vec<Entree>,
}

impl MoteurCalc {
    /// Moteur neuf : accumulateur 0, description vide, journal vide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dépose un opérande : accumulateur ← valeur, description ← texte décimal.
    pub fn set_operande(&mut self, valeur: f64) {
        self.accumulateur = valeur;
        self.description_accumulateur = format_operande(valeur);
        self.programme.push(Entree::Nombre(valeur));
    }

    /// Applique le comportement lié à `symbole`.
    ///
    /// Le symbole est journalisé AVANT la consultation du registre : un rejeu
    /// doit reproduire exactement ce qui a été invoqué, reconnu ou non.
    /// Symbole inconnu => aucune autre mutation (politique permissive).
    pub fn applique_symbole(&mut self, symbole: &str) {
        self.programme.push(Entree::Symbole(symbole.to_string()));

        let op = match operation(symbole) {
            Some(op) => op,
            None => return,
        };

        match op {
            Operation::Constante(valeur) => {
                self.accumulateur = valeur;
                self.description_accumulateur = symbole.to_string();
            }
            Operation::SansOperande(calcul, decrit) => {
                // description d’abord, tirage ensuite
                self.description_accumulateur = decrit();
                self.accumulateur = calcul();
            }
            Operation::Unaire(calcul, decrit) => {
                self.description_accumulateur = decrit(&self.description_accumulateur);
                self.accumulateur = calcul(self.accumulateur);
            }
            Operation::Binaire(calcul, decrit) => {
                // enchaînement gauche-droite : l’attente courante se résout d’abord
                self.resous_en_attente();
                self.en_attente = Some(OperationEnAttente {
                    calcul,
                    premier_operande: self.accumulateur,
                    decrit,
                    description_premier: self.description_accumulateur.clone(),
                });
            }
            Operation::Egal => self.resous_en_attente(),
        }
    }

    /// Point unique de résolution différée (no-op si rien en attente).
    fn resous_en_attente(&mut self) {
        if let Some(attente) = self.en_attente.take() {
            self.description_accumulateur =
                (attente.decrit)(&attente.description_premier, &self.description_accumulateur);
            self.accumulateur = (attente.calcul)(attente.premier_operande, self.accumulateur);
        }
    }

    /// Vrai ssi une opération binaire attend son second opérande.
    pub fn est_resultat_partiel(&self) -> bool {
        self.en_attente.is_some()
    }

    /// Valeur courante de l’accumulateur.
    pub fn resultat(&self) -> f64 {
        self.accumulateur
    }

    /// Trace lisible de l’expression construite jusqu’ici.
    ///
    /// Si une opération est en attente, le second opérande est rendu vide :
    /// c’est à l’appelant d’afficher un marqueur de continuation (voir
    /// pupitre, bandeau()).
    pub fn description(&self) -> String {
        match &self.en_attente {
            None => self.description_accumulateur.clone(),
            Some(attente) => (attente.decrit)(&attente.description_premier, ""),
        }
    }

    /// Journal exporté : opérandes et symboles dans l’ordre d’application.
    pub fn programme(&self) -> &[Entree] {
        &self.programme
    }

    /// Rejeu : remise à zéro puis re-dispatch de chaque entrée dans l’ordre.
    ///
    /// Déterministe tant que le programme ne contient pas "Rand" (tirage non
    /// persisté, voir programme.rs).
    pub fn set_programme(&mut self, entrees: &[Entree]) {
        self.clear();
        for entree in entrees {
            match entree {
                Entree::Nombre(valeur) => self.set_operande(*valeur),
                Entree::Symbole(symbole) => self.applique_symbole(symbole),
            }
        }
    }

    /// AC : remise à zéro totale (accumulateur, attente, description, journal).
    pub fn clear(&mut self) {
        self.accumulateur = 0.0;
        self.description_accumulateur.clear();
        self.en_attente = None;
        self.programme.clear();
    }
}

/* ------------------------ Tests ------------------------ */
