// src/noyau/fonctions.rs
//
// Bibliothèque numérique (f64) : trig / trig inverse / log / ln / racine.
// - Mode DEG : sin/cos/tan convertissent l’argument degrés -> radians,
//              asin/acos/atan convertissent le résultat radians -> degrés.
// - Aucune validation de domaine : asin(2) = NaN, log(0) = -inf, etc.
//   Le formatage affichera "Error".

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Unité d’angle des fonctions trigonométriques.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Degres,
    Radians,
}

impl Mode {
    pub fn basculer(self) -> Mode {
        match self {
            Mode::Degres => Mode::Radians,
            Mode::Radians => Mode::Degres,
        }
    }

    /// Libellé de l’indicateur (DEG / RAD).
    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Degres => "DEG",
            Mode::Radians => "RAD",
        }
    }
}

/// Fonctions unaires reconnues par l’évaluateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log10,
    Ln,
    Sqrt,
}

impl Fonction {
    pub const TOUTES: [Fonction; 9] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Asin,
        Fonction::Acos,
        Fonction::Atan,
        Fonction::Log10,
        Fonction::Ln,
        Fonction::Sqrt,
    ];

    /// Nom saisi par l’utilisateur (avant réécriture). √ est traité à part.
    pub fn nom_saisie(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Log10 => "log",
            Fonction::Ln => "ln",
            Fonction::Sqrt => "√",
        }
    }

    /// Nom canonique (après réécriture), le seul que le tokenizer accepte.
    pub fn nom_interne(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Log10 => "log10",
            Fonction::Ln => "ln",
            Fonction::Sqrt => "sqrt",
        }
    }

    pub fn depuis_saisie(nom: &str) -> Option<Fonction> {
        Self::TOUTES.into_iter().find(|f| f.nom_saisie() == nom)
    }

    pub fn depuis_nom_interne(nom: &str) -> Option<Fonction> {
        Self::TOUTES.into_iter().find(|f| f.nom_interne() == nom)
    }

    /// Applique la fonction (IEEE-754, NaN/inf propagés tels quels).
    pub fn appliquer(self, x: f64, mode: Mode) -> f64 {
        let deg = mode == Mode::Degres;
        let vers_rad = |v: f64| if deg { v * PI / 180.0 } else { v };
        let vers_deg = |v: f64| if deg { v * 180.0 / PI } else { v };

        match self {
            Fonction::Sin => vers_rad(x).sin(),
            Fonction::Cos => vers_rad(x).cos(),
            Fonction::Tan => vers_rad(x).tan(),
            Fonction::Asin => vers_deg(x.asin()),
            Fonction::Acos => vers_deg(x.acos()),
            Fonction::Atan => vers_deg(x.atan()),
            Fonction::Log10 => x.log10(),
            Fonction::Ln => x.ln(),
            Fonction::Sqrt => x.sqrt(),
        }
    }
}
