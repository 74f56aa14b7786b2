//! Noyau — évaluateur gauche-à-droite
//!
//! Au plus un opérateur en attente, au plus une valeur en attente :
//! l’évaluation est immédiate, deux `Option` suffisent (pas de piles).
//!
//! Repos (pas d’opérateur) --op--> Accumulation --op--> Accumulation
//!                                               --"="--> Repos

use super::affichage::Affichage;
use super::erreur::Resultat;
use super::format::texte_double;
use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Repos,
    Accumulation,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluateur {
    operateur_en_attente: Option<Operateur>,
    valeur_en_attente: Option<f64>,
}

impl Evaluateur {
    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur_en_attente
    }

    pub fn valeur_en_attente(&self) -> Option<f64> {
        self.valeur_en_attente
    }

    pub fn phase(&self) -> Phase {
        match self.operateur_en_attente {
            Some(_) => Phase::Accumulation,
            None => Phase::Repos,
        }
    }

    /// Appui sur un opérateur (`Some(op)`) ou sur "=" (`None`).
    ///
    /// L’affichage est relu d’abord : en cas d’échec, rien n’est modifié.
    pub fn appuyer(
        &mut self,
        affichage: &mut Affichage,
        suivant: Option<Operateur>,
    ) -> Resultat<()> {
        let operande = affichage.valeur()?;

        let valeur = match (self.operateur_en_attente.take(), self.valeur_en_attente) {
            (Some(op), Some(gauche)) => op.appliquer(gauche, operande),
            // Pas d’opérateur : on retient simplement l’opérande.
            _ => operande,
        };

        self.valeur_en_attente = Some(valeur);
        affichage.publier(texte_double(valeur));

        self.operateur_en_attente = suivant;
        affichage.marquer_operande_neuve();

        tracing::trace!(
            valeur,
            suivant = ?suivant.map(Operateur::symbole),
            "opérateur appliqué"
        );
        Ok(())
    }
}
