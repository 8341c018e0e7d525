// src/noyau/format.rs
//
// Affichage du résultat numérique.
// - NaN / ±inf / échec          -> "Error"
// - 0 (et -0)                   -> "0"
// - |x| > 1e10 ou 0 < |x| < 1e-10 -> scientifique, 6 décimales (1.234568e+11)
// - sinon : écriture par défaut (décimale, ou exposant court sous 1e-6 : 1.234e-8) ;
//   si plus de 10 caractères après le point, arrondi à 10 décimales puis
//   suppression des zéros finaux (et du point orphelin)

use super::erreur::ErreurCalc;

/// Texte affiché pour toute évaluation ratée ou non finie.
pub const ERREUR: &str = "Error";

const SEUIL_GRAND: f64 = 1e10;
const SEUIL_PETIT: f64 = 1e-10;
/// Sous ce seuil, l’écriture par défaut passe en exposant.
const SEUIL_EXPOSANT: f64 = 1e-6;
const DECIMALES_MAX: usize = 10;
const DECIMALES_SCI: usize = 6;

/// Formate un résultat d’évaluation (échec => "Error").
pub fn format_result(resultat: &Result<f64, ErreurCalc>) -> String {
    match resultat {
        Ok(x) => format_number(*x),
        Err(_) => ERREUR.to_string(),
    }
}

/// Formate un nombre pour l’affichage.
pub fn format_number(x: f64) -> String {
    if !x.is_finite() {
        return ERREUR.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if a > SEUIL_GRAND || a < SEUIL_PETIT {
        return format_scientifique(x);
    }

    let s = ecriture_par_defaut(x);
    match s.split_once('.') {
        Some((_, frac)) if frac.len() > DECIMALES_MAX => {
            let fixe = format!("{x:.prec$}", prec = DECIMALES_MAX);
            let t = fixe.trim_end_matches('0').trim_end_matches('.');
            if t == "-0" {
                "0".to_string()
            } else {
                t.to_string()
            }
        }
        _ => s,
    }
}

/// Chiffres les plus courts qui se relisent en x ; exposant sous 1e-6.
fn ecriture_par_defaut(x: f64) -> String {
    if x.abs() < SEUIL_EXPOSANT {
        format!("{x:e}")
    } else {
        x.to_string()
    }
}

/// 123456789012.345 -> "1.234568e+11" (exposant toujours signé).
fn format_scientifique(x: f64) -> String {
    let brut = format!("{x:.prec$e}", prec = DECIMALES_SCI);
    match brut.split_once('e') {
        Some((mantisse, exp)) if exp.starts_with('-') => format!("{mantisse}e{exp}"),
        Some((mantisse, exp)) => format!("{mantisse}e+{exp}"),
        None => brut,
    }
}
