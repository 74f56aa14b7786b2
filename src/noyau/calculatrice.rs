// src/noyau/calculatrice.rs
//
// État complet de la calculatrice : affichage + évaluateur.
// Une seule porte d’entrée : `traiter(Touche)`.
// `transition` en est la forme pure (état, touche) -> état'.

use super::affichage::Affichage;
use super::erreur::Resultat;
use super::evaluateur::{Evaluateur, Phase};
use super::touche::Touche;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calculatrice {
    affichage: Affichage,
    evaluateur: Evaluateur,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texte à rendre tel quel par la coque.
    pub fn ecran(&self) -> &str {
        self.affichage.texte()
    }

    pub fn affichage(&self) -> &Affichage {
        &self.affichage
    }

    pub fn evaluateur(&self) -> &Evaluateur {
        &self.evaluateur
    }

    pub fn phase(&self) -> Phase {
        self.evaluateur.phase()
    }

    pub fn traiter(&mut self, touche: Touche) -> Resultat<()> {
        match touche {
            Touche::Chiffre(d) => self.affichage.chiffre(d),
            Touche::Virgule => self.affichage.virgule(),
            Touche::Effacer => self.affichage.effacer(),
            Touche::Operateur(op) => self.evaluateur.appuyer(&mut self.affichage, Some(op))?,
            Touche::Egal => self.evaluateur.appuyer(&mut self.affichage, None)?,
        }

        tracing::trace!(touche = %touche.libelle(), ecran = %self.ecran(), "touche traitée");
        Ok(())
    }

    pub fn transition(mut self, touche: Touche) -> Resultat<Self> {
        self.traiter(touche)?;
        Ok(self)
    }

    /// Rejoue une suite de caractères clavier (les inconnus sont ignorés).
    #[cfg(test)]
    pub fn saisir(&mut self, clavier: &str) -> Resultat<()> {
        clavier
            .chars()
            .filter_map(Touche::depuis_car)
            .try_for_each(|t| self.traiter(t))
    }
}
