// src/noyau/programme.rs
//
// Journal de programme : la suite ordonnée des entrées appliquées au moteur.
// --------------------------------------------------------------------------
// - Entree : Nombre(f64) | Symbole(String), union étiquetée pour un rejeu typé
// - Programme : alias de Vec<Entree>, la séquence opaque échangée avec l’hôte
// - Sérialisation "plate" (untagged) : un programme sort en JSON comme un
//   simple tableau hétérogène, ex. [3.0,"+",4.0,"="]
// - Import tolérant : tout élément JSON qui n’est ni nombre ni chaîne est
//   écarté sans erreur (même politique que les symboles inconnus : un rejeu
//   ne s’interrompt jamais)
//
// NOTE: un f64 non fini (NaN/∞) sort en JSON comme `null` ; à l’import
// tolérant, `null` est écarté comme élément non conforme.
//
// Rejeu et déterminisme : rejouer un programme reproduit l’état du moteur à
// l’identique SEULEMENT s’il ne contient pas "Rand" (tirage non persisté).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::fmt;

use crate::noyau::format::format_operande;

/// Élément du journal : un opérande ou un symbole, dans l’ordre d’application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entree {
    Nombre(f64),
    Symbole(String),
}

/// La séquence opaque exportée puis rejouée par l’hôte.
pub type Programme = Vec<Entree>;

impl Entree {
    /// Import tolérant d’un élément JSON ; None si la forme est inconnue.
    pub fn depuis_valeur(valeur: &Value) -> Option<Entree> {
        match valeur {
            Value::Number(n) => n.as_f64().map(Entree::Nombre),
            Value::String(s) => Some(Entree::Symbole(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Entree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entree::Nombre(valeur) => write!(f, "{}", format_operande(*valeur)),
            Entree::Symbole(symbole) => write!(f, "{symbole}"),
        }
    }
}

/// Import tolérant d’une suite JSON : garde nombres et chaînes dans l’ordre,
/// écarte le reste sans erreur.
pub fn entrees_depuis_valeurs(valeurs: &[Value]) -> Programme {
    valeurs.iter().filter_map(Entree::depuis_valeur).collect()
}

/// Journal en texte (trace), entrées séparées par des espaces.
pub fn format_programme(entrees: &[Entree]) -> String {
    entrees
        .iter()
        .map(|entree| entree.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
