// src/noyau/expr.rs
//
// Arbre d’expression (f64).
// - Num  : littéral
// - Neg  : moins unaire
// - Appel: fonction unaire de la bibliothèque numérique
// - Add/Sub/Mul/Div/Pow : binaires
//
// L’évaluation est totale : division par zéro, domaine invalide, etc.
// produisent ±inf / NaN (le formatage décidera de l’affichage).

use std::fmt;

use super::fonctions::{Fonction, Mode};

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),

    Neg(Box<Expr>),
    Appel(Fonction, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évalue l’arbre dans le mode d’angle donné.
    pub fn eval(&self, mode: Mode) -> f64 {
        use Expr::*;

        match self {
            Num(v) => *v,
            Neg(x) => -x.eval(mode),
            Appel(f, x) => f.appliquer(x.eval(mode), mode),

            Add(a, b) => a.eval(mode) + b.eval(mode),
            Sub(a, b) => a.eval(mode) - b.eval(mode),
            Mul(a, b) => a.eval(mode) * b.eval(mode),
            Div(a, b) => a.eval(mode) / b.eval(mode),
            Pow(a, b) => a.eval(mode).powf(b.eval(mode)),
        }
    }
}

/// Affichage entièrement parenthésé (démarche).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Num(v) => write!(f, "{v}"),
            Neg(x) => write!(f, "-({x})"),
            Appel(fonc, x) => write!(f, "{}({x})", fonc.nom_interne()),

            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
            Pow(a, b) => write!(f, "({a}**{b})"),
        }
    }
}
