// src/noyau/erreurs.rs
//
// Taxonomie fermée des erreurs du noyau.
// Les messages affichés à l’utilisateur sont posés à la frontière HTTP (app/reponse.rs) :
// ici, seulement une description interne courte.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// `)` sans `(` correspondante, ou `(` jamais fermée.
    #[error("parenthèses non équilibrées")]
    Parentheses,

    /// Opérateur sans ses deux opérandes, ou pile finale différente de 1 valeur.
    #[error("valeurs insuffisantes")]
    Valeurs,

    #[error("division par zéro")]
    DivisionParZero,

    /// Caractère hors alphabet, ou littéral numérique mal formé (détecté au parse).
    #[error("caractère non autorisé")]
    Caractere,
}
