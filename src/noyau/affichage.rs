//! Affichage : l’opérande courante sous forme texte + les deux drapeaux de saisie.
//!
//! Contrats :
//! - le texte n’est jamais vide ("0" au départ) ;
//! - au plus un '.' ;
//! - le '.' n’apparaît qu’une fois un chiffre tapé après la touche virgule ;
//! - le texte se relit toujours comme un double.

use super::erreur::{ErreurNoyau, Resultat};
use super::touche::Chiffre;

const TEXTE_INITIAL: &str = "0";

#[derive(Clone, Debug, PartialEq)]
pub struct Affichage {
    texte: String,

    /// Posé par chaque opérateur / "=" : le prochain chiffre commence un nouveau nombre.
    operande_neuve: bool,

    /// Posé par la virgule : le prochain chiffre insère d’abord ".".
    attente_decimale: bool,
}

impl Default for Affichage {
    fn default() -> Self {
        Self {
            texte: TEXTE_INITIAL.to_string(),
            operande_neuve: false,
            attente_decimale: false,
        }
    }
}

impl Affichage {
    pub fn texte(&self) -> &str {
        &self.texte
    }

    #[cfg(test)]
    pub fn operande_neuve(&self) -> bool {
        self.operande_neuve
    }

    pub fn attente_decimale(&self) -> bool {
        self.attente_decimale
    }

    /// Relit le texte comme un double ("Infinity", "NaN", "1.0E10" compris).
    pub fn valeur(&self) -> Resultat<f64> {
        self.texte
            .parse::<f64>()
            .map_err(|source| ErreurNoyau::AffichageMalForme {
                texte: self.texte.clone(),
                source,
            })
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn chiffre(&mut self, d: Chiffre) {
        let c = d.car();

        if self.texte == TEXTE_INITIAL {
            // "0" -> "0.d" ou "d". Ici operande_neuve reste tel quel.
            if self.attente_decimale {
                self.texte.push('.');
                self.texte.push(c);
                self.attente_decimale = false;
            } else {
                self.texte = c.to_string();
            }
            return;
        }

        if self.operande_neuve {
            self.texte = if self.attente_decimale {
                format!("0.{c}")
            } else {
                c.to_string()
            };
            self.attente_decimale = false;
            self.operande_neuve = false;
            return;
        }

        if self.attente_decimale {
            self.texte.push('.');
            self.attente_decimale = false;
        }
        self.texte.push(c);
    }

    /// Sans effet si le texte a déjà un '.'.
    pub fn virgule(&mut self) {
        if !self.texte.contains('.') {
            self.attente_decimale = true;
        }
    }

    /// "C" : texte seulement. Drapeaux et évaluateur intacts.
    pub fn effacer(&mut self) {
        self.texte.clear();
        self.texte.push_str(TEXTE_INITIAL);
    }

    /* ------------------------ Côté évaluateur ------------------------ */

    /// Dépose un résultat calculé. Ne touche à aucun drapeau.
    pub fn publier(&mut self, texte: impl Into<String>) {
        self.texte = texte.into();
    }

    pub(super) fn marquer_operande_neuve(&mut self) {
        self.operande_neuve = true;
    }
}
