//! Touches : l’unique type d’événement que la coque envoie au noyau.
//!
//! Un chiffre n’existe que validé (0..=9) ; l’affichage n’a donc jamais
//! à vérifier ce qu’on lui pousse.

use super::operateur::Operateur;

/// Chiffre décimal validé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chiffre(u8);

impl Chiffre {
    pub fn new(valeur: u8) -> Option<Self> {
        (valeur <= 9).then_some(Self(valeur))
    }

    pub fn depuis_car(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn car(self) -> char {
        char::from(b'0' + self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Chiffre(Chiffre),
    Virgule,
    Operateur(Operateur),
    Egal,
    Effacer,
}

impl Touche {
    /// Clavier : chiffres, '.' ou ',', + - * /, '=', 'c'/'C'.
    /// Tout le reste est ignoré (None).
    pub fn depuis_car(c: char) -> Option<Self> {
        match c {
            '.' | ',' => Some(Touche::Virgule),
            '=' => Some(Touche::Egal),
            'c' | 'C' => Some(Touche::Effacer),
            _ => Chiffre::depuis_car(c)
                .map(Touche::Chiffre)
                .or_else(|| Operateur::depuis_symbole(c).map(Touche::Operateur)),
        }
    }

    /// Libellé du bouton correspondant.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.car().to_string(),
            Touche::Virgule => ".".into(),
            Touche::Operateur(op) => op.symbole().to_string(),
            Touche::Egal => "=".into(),
            Touche::Effacer => "C".into(),
        }
    }
}
