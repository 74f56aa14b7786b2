//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la `Calculatrice` du noyau et lui transmettre les touches.
//! Aucune arithmétique ici ; la vue ne fait que lire `ecran()`.
//!
//! Une erreur du noyau signifie un affichage mal formé, donc un bug :
//! journalisée, assertion en debug, jamais montrée à l’utilisateur.

use crate::noyau::format::texte_double;
use crate::noyau::{Calculatrice, ErreurNoyau, Phase, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    calc: Calculatrice,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::new(),
        }
    }
}

impl AppCalc {
    pub fn ecran(&self) -> &str {
        self.calc.ecran()
    }

    #[cfg(test)]
    pub fn calculatrice(&self) -> &Calculatrice {
        &self.calc
    }

    /// Bouton ou clavier : même chemin.
    ///
    /// On passe par la forme pure : en cas d’erreur, l’état d’avant reste en place.
    pub fn appuyer(&mut self, touche: Touche) {
        tracing::debug!(touche = %touche.libelle(), "appui");

        match self.calc.clone().transition(touche) {
            Ok(suivant) => self.calc = suivant,
            Err(err) => signaler(touche, &err),
        }
    }

    /// Caractères tapés au clavier (inconnus ignorés).
    pub fn appuyer_texte(&mut self, texte: &str) {
        for touche in texte.chars().filter_map(Touche::depuis_car) {
            self.appuyer(touche);
        }
    }

    /// Petite ligne au-dessus de l’écran : opération en cours ("12.0 +")
    /// et "." si la virgule attend son chiffre. Vide au repos.
    pub fn indicateur(&self) -> String {
        let ev = self.calc.evaluateur();

        let mut morceaux = Vec::new();
        if let (Phase::Accumulation, Some(op), Some(valeur)) = (
            self.calc.phase(),
            ev.operateur_en_attente(),
            ev.valeur_en_attente(),
        ) {
            morceaux.push(format!("{} {op}", texte_double(valeur)));
        }
        if self.calc.affichage().attente_decimale() {
            morceaux.push(".".to_string());
        }
        morceaux.join(" ")
    }
}

fn signaler(touche: Touche, err: &ErreurNoyau) {
    tracing::error!(%err, touche = ?touche, "état du noyau incohérent");
    debug_assert!(false, "état du noyau incohérent: {err}");
}
