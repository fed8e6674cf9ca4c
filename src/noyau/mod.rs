//! Noyau de calcul (pur, sans E/S, sans journal)
//!
//! Organisation interne :
//! - erreurs.rs  : taxonomie fermée (4 cas)
//! - jetons.rs   : opérateurs + lecture paresseuse des jetons
//! - rpn.rs      : shunting-yard -> séquence postfixée
//! - eval.rs     : pile de valeurs + pipeline complet

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreurs::ErreurCalcul;
pub use eval::evaluer;
