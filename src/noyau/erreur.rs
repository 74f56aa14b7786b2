// src/noyau/erreur.rs

use std::num::ParseFloatError;

use thiserror::Error;

/// Erreurs du noyau.
///
/// Une seule famille : l’affichage ne se relit pas comme un nombre.
/// Avec les règles de saisie de `Affichage`, ce cas est inatteignable ;
/// la coque le traite comme une erreur de programmation, jamais comme
/// un message pour l’utilisateur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    #[error("affichage mal formé : {texte:?}")]
    AffichageMalForme {
        texte: String,
        #[source]
        source: ParseFloatError,
    },
}

pub type Resultat<T> = std::result::Result<T, ErreurNoyau>;
