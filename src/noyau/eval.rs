//! Noyau — évaluation (pipeline réel)
//!
//! texte -> RPN (shunting-yard, rpn.rs) -> pile de valeurs f64 -> résultat
//!
//! Pur, sans état partagé : chaque appel travaille sur ses propres piles.

use super::erreurs::ErreurCalcul;
use super::rpn::{vers_postfixe, Postfixe};

/// API publique : évalue une expression arithmétique (`+ - * /`, parenthèses).
pub fn evaluer(expression: &str) -> Result<f64, ErreurCalcul> {
    let rpn = vers_postfixe(expression)?;
    evaluer_postfixe(&rpn)
}

/// Évalue une séquence RPN avec une pile de valeurs.
///
/// - opérateur : exige 2 valeurs (b = sommet = opérande droite, a = gauche)
/// - nombre : parse différé ici ; échec => `Caractere`
/// - fin : exactement 1 valeur, sinon `Valeurs`
pub fn evaluer_postfixe(rpn: &[Postfixe<'_>]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for elem in rpn {
        match *elem {
            Postfixe::Op(op) => {
                let b = pile.pop().ok_or(ErreurCalcul::Valeurs)?;
                let a = pile.pop().ok_or(ErreurCalcul::Valeurs)?;
                pile.push(op.appliquer(a, b)?);
            }
            Postfixe::Nombre(s) => pile.push(parse_nombre(s)?),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::Valeurs),
    }
}

/// Littéral décimal : chiffres + au plus un point, au moins un chiffre.
/// Un littéral hors de la plage f64 (=> ±∞) est refusé comme mal formé.
fn parse_nombre(s: &str) -> Result<f64, ErreurCalcul> {
    if !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(ErreurCalcul::Caractere);
    }
    let v: f64 = s.parse().map_err(|_| ErreurCalcul::Caractere)?;
    if !v.is_finite() {
        return Err(ErreurCalcul::Caractere);
    }
    Ok(v)
}
