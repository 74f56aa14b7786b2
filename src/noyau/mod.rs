//! Noyau de la calculatrice immédiate
//!
//! Organisation interne :
//! - touche.rs       : événements d’entrée (chiffre, virgule, opérateur, "=", "C")
//! - operateur.rs    : + - * / en double IEEE-754
//! - affichage.rs    : texte courant + drapeaux de saisie
//! - evaluateur.rs   : opérateur/valeur en attente, gauche-à-droite
//! - format.rs       : forme texte des résultats publiés
//! - calculatrice.rs : état complet + dispatch d’une touche
//! - erreur.rs       : affichage mal formé (inatteignable en pratique)

pub mod affichage;
pub mod calculatrice;
pub mod erreur;
pub mod evaluateur;
pub mod format;
pub mod operateur;
pub mod touche;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::Calculatrice;
pub use erreur::ErreurNoyau;
pub use evaluateur::Phase;
pub use operateur::Operateur;
pub use touche::{Chiffre, Touche};
