//! Noyau d’évaluation (f64, sans état)
//!
//! Organisation interne :
//! - reecriture.rs : π, e, noms de fonctions, ^ -> forme canonique
//! - postfixe.rs   : n! puis n% résolus en littéraux
//! - fonctions.rs  : Mode (DEG/RAD) + trig / log / ln / √
//! - jetons.rs     : tokenisation de la forme canonique
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : arbre + évaluation
//! - eval.rs       : pipeline complet
//! - format.rs     : affichage (Error, scientifique, 10 décimales)

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod postfixe;
pub mod reecriture;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::{evaluate, evaluate_detail, Demarche};
pub use fonctions::Mode;
pub use format::{format_number, format_result, ERREUR};
