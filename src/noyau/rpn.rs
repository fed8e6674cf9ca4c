// src/noyau/rpn.rs
//
// Shunting-yard : texte -> RPN (postfix)
//
// Règles:
// - Nombre : sortie directe (ne passe jamais par la pile).
// - Opérateur : dépile tout opérateur de priorité >= (associativité gauche), puis empile.
// - '(' : empilée sans condition (priorité 0 => jamais dépilée par la règle ci-dessus).
// - ')' : dépile jusqu’à '(' (jetée). Pile vide avant '(' => Parentheses.
// - Fin : vide la pile ; une '(' restante => Parentheses.
//
// Première erreur rencontrée => retour immédiat, sans résultat partiel.

use std::fmt;

use super::erreurs::ErreurCalcul;
use super::jetons::{Jeton, Operateur, Scanner};

/// Élément d’une séquence postfixée : jamais de parenthèse ici.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Postfixe<'a> {
    Nombre(&'a str),
    Op(Operateur),
}

impl fmt::Display for Postfixe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postfixe::Nombre(s) => f.write_str(s),
            Postfixe::Op(op) => write!(f, "{op}"),
        }
    }
}

/// Format utilitaire (journal) : séquence RPN en texte, séparée par des espaces.
pub fn format_postfixe(rpn: &[Postfixe<'_>]) -> String {
    rpn.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convertit une expression infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   "2*(3+4)"  ->  [2, 3, 4, +, *]
pub fn vers_postfixe(expression: &str) -> Result<Vec<Postfixe<'_>>, ErreurCalcul> {
    let mut out: Vec<Postfixe<'_>> = Vec::new();
    // invariant : seulement Jeton::Op ou Jeton::ParOuvrante
    let mut ops: Vec<Jeton<'_>> = Vec::new();

    for jeton in Scanner::new(expression) {
        match jeton? {
            Jeton::Nombre(s) => out.push(Postfixe::Nombre(s)),

            Jeton::Op(op) => {
                // '(' (priorité 0) arrête la boucle : jamais dépilée ici
                while let Some(&Jeton::Op(haut)) = ops.last() {
                    if haut.priorite() < op.priorite() {
                        break;
                    }
                    out.push(Postfixe::Op(haut));
                    ops.pop();
                }
                ops.push(Jeton::Op(op));
            }

            Jeton::ParOuvrante => ops.push(Jeton::ParOuvrante),

            Jeton::ParFermante => loop {
                match ops.pop() {
                    Some(Jeton::ParOuvrante) => break,
                    Some(Jeton::Op(op)) => out.push(Postfixe::Op(op)),
                    Some(Jeton::Nombre(_) | Jeton::ParFermante) => {
                        unreachable!("seuls opérateurs et '(' vivent sur la pile")
                    }
                    None => return Err(ErreurCalcul::Parentheses),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(haut) = ops.pop() {
        match haut {
            Jeton::Op(op) => out.push(Postfixe::Op(op)),
            // '(' jamais fermée
            _ => return Err(ErreurCalcul::Parentheses),
        }
    }

    Ok(out)
}
