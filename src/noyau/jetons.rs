// src/noyau/jetons.rs

use std::fmt;
use std::str::CharIndices;

use super::erreurs::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    /// Table de priorité du shunting-yard. `(` vaut 0 (voir rpn.rs), `)` n’a pas d’entrée.
    pub fn priorite(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    /// Applique l’opérateur : `a` = opérande gauche, `b` = opérande droite.
    /// La division par un zéro exact est refusée AVANT de diviser.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        match self {
            Self::Plus => Ok(a + b),
            Self::Moins => Ok(a - b),
            Self::Fois => Ok(a * b),
            Self::Divise => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton<'a> {
    /// Suite brute de chiffres et de points, non validée ici.
    Nombre(&'a str),
    Op(Operateur),
    ParOuvrante,
    ParFermante,
}

fn est_chiffre_ou_point(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Espaces acceptés : ASCII seulement (tab vertical et saut de page compris).
fn est_espace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Lecture paresseuse, gauche -> droite.
///
/// Paresseuse : le convertisseur consomme jeton par jeton, donc une erreur de
/// parenthèse rencontrée AVANT un caractère interdit est bien signalée en premier.
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<CharIndices<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    /// Consomme la plus longue suite de chiffres/points commençant à `debut`.
    fn lire_nombre(&mut self, debut: usize) -> &'a str {
        let mut fin = self.source.len();
        while let Some(&(i, c)) = self.chars.peek() {
            if !est_chiffre_ou_point(c) {
                fin = i;
                break;
            }
            self.chars.next();
        }
        &self.source[debut..fin]
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Jeton<'a>, ErreurCalcul>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (i, c) = self.chars.next()?;

            if est_espace(c) {
                continue;
            }

            if est_chiffre_ou_point(c) {
                return Some(Ok(Jeton::Nombre(self.lire_nombre(i))));
            }

            let jeton = match c {
                '(' => Jeton::ParOuvrante,
                ')' => Jeton::ParFermante,
                _ => match Operateur::depuis_char(c) {
                    Some(op) => Jeton::Op(op),
                    None => return Some(Err(ErreurCalcul::Caractere)),
                },
            };
            return Some(Ok(jeton));
        }
    }
}
