//! Tests fuzz safe : suites de touches aléatoires, invariants de l’affichage.
//!
//! - nombre de cas et longueur des suites bornés
//! - invariant clé : l’écran se relit toujours comme un double,
//!   donc un opérateur ne peut jamais échouer

use proptest::prelude::*;

use super::format::texte_double;
use super::{Calculatrice, Chiffre, Operateur, Phase, Touche};

/* ------------------------ Stratégies ------------------------ */

fn touche() -> impl Strategy<Value = Touche> {
    prop_oneof![
        // chiffres plus fréquents : suites plus réalistes
        4 => (0u8..=9).prop_map(|d| Touche::Chiffre(Chiffre::new(d).unwrap())),
        1 => Just(Touche::Virgule),
        2 => proptest::sample::select(Operateur::TOUS.to_vec()).prop_map(Touche::Operateur),
        1 => Just(Touche::Egal),
        1 => Just(Touche::Effacer),
    ]
}

fn suite() -> impl Strategy<Value = Vec<Touche>> {
    proptest::collection::vec(touche(), 0..64)
}

fn check_ecran(ecran: &str) -> Result<(), TestCaseError> {
    prop_assert!(!ecran.is_empty());
    prop_assert!(ecran.matches('.').count() <= 1, "ecran={ecran:?}");
    prop_assert!(ecran.parse::<f64>().is_ok(), "ecran={ecran:?}");
    Ok(())
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn fuzz_ecran_toujours_relisible(touches in suite()) {
        let mut c = Calculatrice::new();
        for t in touches {
            prop_assert!(c.traiter(t).is_ok(), "touche={t:?} ecran={:?}", c.ecran());
            check_ecran(c.ecran())?;
        }
    }

    #[test]
    fn fuzz_phase_suit_le_dernier_operateur(touches in suite()) {
        let mut c = Calculatrice::new();
        let mut attendu = Phase::Repos;
        for t in touches {
            c.traiter(t).unwrap();
            match t {
                Touche::Operateur(_) => attendu = Phase::Accumulation,
                Touche::Egal => attendu = Phase::Repos,
                _ => {}
            }
            prop_assert_eq!(c.phase(), attendu);
        }
    }

    #[test]
    fn fuzz_transition_equivaut_a_traiter(touches in suite()) {
        let mut mutable = Calculatrice::new();
        let mut pure = Calculatrice::new();
        for t in touches {
            mutable.traiter(t).unwrap();
            pure = pure.transition(t).unwrap();
        }
        prop_assert_eq!(mutable.ecran(), pure.ecran());
        prop_assert_eq!(mutable.phase(), pure.phase());
    }

    #[test]
    fn fuzz_egal_idempotent(touches in suite()) {
        let mut c = Calculatrice::new();
        for t in touches {
            c.traiter(t).unwrap();
        }
        c.traiter(Touche::Egal).unwrap();
        let une_fois = c.ecran().to_string();
        c.traiter(Touche::Egal).unwrap();
        prop_assert_eq!(c.ecran(), une_fois.as_str());
    }

    #[test]
    fn fuzz_chiffres_seuls(chiffres in proptest::collection::vec(0u8..=9, 1..15)) {
        // Sans virgule : concaténation, zéros de tête absorbés.
        let mut c = Calculatrice::new();
        for &d in &chiffres {
            c.traiter(Touche::Chiffre(Chiffre::new(d).unwrap())).unwrap();
        }
        let brut: String = chiffres.iter().map(|d| char::from(b'0' + d)).collect();
        let attendu = match brut.trim_start_matches('0') {
            "" => "0",
            reste => reste,
        };
        prop_assert_eq!(c.ecran(), attendu);
    }

    #[test]
    fn fuzz_texte_double_se_relit(x in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let relu: f64 = texte_double(x).parse().unwrap();
        prop_assert_eq!(relu.to_bits(), x.to_bits());
    }
}
