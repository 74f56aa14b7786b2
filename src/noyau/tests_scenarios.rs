//! Scénarios de bout en bout : suites de touches -> écran attendu.
//!
//! On passe par `saisir` (mêmes caractères que le clavier) pour que
//! chaque scénario se lise comme ce que l’utilisateur tape.

use super::{Calculatrice, Operateur, Phase};

fn ecran_apres(clavier: &str) -> String {
    let mut c = Calculatrice::new();
    c.saisir(clavier)
        .unwrap_or_else(|e| panic!("clavier={clavier:?} err={e}"));
    c.ecran().to_string()
}

#[test]
fn gauche_a_droite_sans_priorite() {
    assert_eq!(ecran_apres("2+3*4="), "20.0");
    assert_eq!(ecran_apres("10-2/4="), "2.0");
}

#[test]
fn resultat_intermediaire_visible() {
    assert_eq!(ecran_apres("2+3*"), "5.0");
    assert_eq!(ecran_apres("2+3*4"), "4");
}

#[test]
fn division_par_zero() {
    assert_eq!(ecran_apres("5/0="), "Infinity");
    assert_eq!(ecran_apres("0-5=/0="), "-Infinity");
    assert_eq!(ecran_apres("0/0="), "NaN");
}

#[test]
fn infini_reutilisable() {
    // "Infinity" se relit : la chaîne continue.
    assert_eq!(ecran_apres("5/0=*0="), "NaN");
    assert_eq!(ecran_apres("5/0=+1="), "Infinity");
}

#[test]
fn effacer_puis_chiffre() {
    assert_eq!(ecran_apres("7C"), "0");
    assert_eq!(ecran_apres("7C3"), "3");
}

#[test]
fn effacer_garde_l_operation_en_cours() {
    // 8 + [7 effacé] 2 = -> 8 + 2
    let mut c = Calculatrice::new();
    c.saisir("8+7C2").unwrap();
    assert_eq!(c.phase(), Phase::Accumulation);
    assert_eq!(c.evaluateur().operateur_en_attente(), Some(Operateur::Plus));
    c.saisir("=").unwrap();
    assert_eq!(c.ecran(), "10.0");
}

#[test]
fn double_operateur_sans_chiffre() {
    // 2e "+" : valeur en attente + même affichage relu
    let mut c = Calculatrice::new();
    c.saisir("6+").unwrap();
    assert_eq!(c.evaluateur().valeur_en_attente(), Some(6.0));
    c.saisir("+").unwrap();
    assert_eq!(c.evaluateur().valeur_en_attente(), Some(12.0));
    assert_eq!(c.ecran(), "12.0");
}

#[test]
fn egal_repete_stable() {
    let mut c = Calculatrice::new();
    c.saisir("9*3=").unwrap();
    assert_eq!(c.ecran(), "27.0");
    for _ in 0..5 {
        c.saisir("=").unwrap();
        assert_eq!(c.ecran(), "27.0");
        assert_eq!(c.phase(), Phase::Repos);
    }
}

#[test]
fn decimaux() {
    assert_eq!(ecran_apres("1.5+2.25="), "3.75");
    assert_eq!(ecran_apres(".1+0.2="), "0.30000000000000004");
    assert_eq!(ecran_apres("1..5"), "1.5");
}

#[test]
fn virgule_sans_effet_sur_un_resultat_a_point() {
    // Après "+", l’écran montre "1.0" : la virgule est ignorée,
    // ".5" se lit donc 5.
    assert_eq!(ecran_apres("1+.5="), "6.0");
}

#[test]
fn virgule_puis_operateur_perd_la_virgule() {
    // "3." puis "+" : l’opérande vaut 3 ; l’intention décimale passe
    // à l’opérande suivante.
    let mut c = Calculatrice::new();
    c.saisir("3.+").unwrap();
    assert_eq!(c.ecran(), "3.0");
    c.saisir("4=").unwrap();
    assert_eq!(c.ecran(), "3.4");
}

#[test]
fn grands_nombres_en_notation_scientifique() {
    assert_eq!(ecran_apres("9999999+1="), "1.0E7");
    assert_eq!(ecran_apres("1/10000="), "1.0E-4");
}

#[test]
fn nouvelle_chaine_apres_egal() {
    // Après "=", un chiffre démarre un nouveau nombre et l’opérateur
    // suivant repart de ce nombre.
    assert_eq!(ecran_apres("2+2=7*2="), "14.0");
}
