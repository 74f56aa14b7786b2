// src/noyau/format.rs
//
// Forme texte d’un résultat publié sur l’affichage.
// -------------------------------------------------
// - NaN / ±inf           : "NaN", "Infinity", "-Infinity"
// - 1e-3 <= |x| < 1e7    : décimal, au moins un chiffre après le point ("20.0")
// - sinon                : mantisse + "E" + exposant ("1.0E7", "1.5E-4")
// - zéro                 : "0.0" / "-0.0"
//
// Toujours la plus courte écriture qui se relit à l’identique.

const BORNE_BASSE_DECIMAL: f64 = 1e-3;
const BORNE_HAUTE_DECIMAL: f64 = 1e7;

pub fn texte_double(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let a = x.abs();
    if a == 0.0 || (BORNE_BASSE_DECIMAL..BORNE_HAUTE_DECIMAL).contains(&a) {
        // `{:?}` garde ".0" sur les entiers et reste en décimal sur cette plage.
        return format!("{x:?}");
    }

    scientifique(x)
}

/// "1.2345e7" -> "1.2345E7" ; "1e10" -> "1.0E10"
fn scientifique(x: f64) -> String {
    let brut = format!("{x:e}");
    let (mantisse, exposant) = brut.split_once('e').unwrap_or((brut.as_str(), "0"));

    if mantisse.contains('.') {
        format!("{mantisse}E{exposant}")
    } else {
        format!("{mantisse}.0E{exposant}")
    }
}
