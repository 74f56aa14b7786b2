// src/noyau/operateur.rs

/// Les quatre opérateurs du pavé. Pas de priorité : l’ordre d’appui fait foi.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// `gauche op droite` en double IEEE-754.
    /// x/0 donne ±inf, 0/0 donne NaN : pas d’erreur, c’est affiché tel quel.
    pub fn appliquer(self, gauche: f64, droite: f64) -> f64 {
        match self {
            Operateur::Plus => gauche + droite,
            Operateur::Moins => gauche - droite,
            Operateur::Fois => gauche * droite,
            Operateur::Divise => gauche / droite,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        Self::TOUS.into_iter().find(|op| op.symbole() == c)
    }
}

impl std::fmt::Display for Operateur {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
