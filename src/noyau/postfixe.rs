// src/noyau/postfixe.rs
//
// Opérateurs postfixés, résolus en texte AVANT l’évaluation arithmétique.
// Ordre imposé : factorielle, puis pourcentage.
//
// Motif reconnu : littéral `\d+(\.\d+)?` immédiatement suivi du suffixe.
// - n!   : n entier >= 0 -> n! (produit exact BigUint, arrondi une seule fois en f64)
// - n!!… : non calculé, le texte est rendu tel quel (le tokenizer refusera le '!')
// - valeur hors f64 : écrite comme un littéral décimal qui se relit en +inf
// - n%   : n/100 exact (rationnel), puis arrondi f64. Aucun “pourcentage de” :
//          100+10% vaut 100+0.1.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use tracing::trace;

use super::erreur::ErreurCalc;

/// Au-delà, n! dépasse f64::MAX.
const FACTORIELLE_MAX_F64: u64 = 170;

/// 10^309 > f64::MAX : relu par le tokenizer, ce littéral vaut +inf.
fn litteral_infini() -> String {
    format!("1{}", "0".repeat(309))
}

/// Valeur -> texte relisible par le tokenizer (jamais "inf").
fn texte_valeur(v: f64) -> String {
    if v.is_infinite() {
        litteral_infini()
    } else {
        v.to_string()
    }
}

/// Remplace chaque `n!` par la valeur de n!. Échoue si n est négatif ou non entier.
pub fn resolve_factorial(expr: &str) -> Result<String, ErreurCalc> {
    let mut out = String::with_capacity(expr.len());
    let mut erreur: Option<ErreurCalc> = None;
    balayer(expr, '!', true, |morceau| {
        if erreur.is_some() {
            return;
        }
        match morceau {
            Morceau::Texte(c) => out.push(c),
            // double factorielle (ou plus) : reconnue, pas calculée
            Morceau::Motif { brut, suffixes, .. } if suffixes > 1 => out.push_str(brut),
            Morceau::Motif { litteral, .. } => match factorielle_texte(litteral) {
                Ok(valeur) => {
                    trace!(litteral, %valeur, "factorielle résolue");
                    out.push_str(&valeur);
                }
                Err(e) => erreur = Some(e),
            },
        }
    });
    match erreur {
        Some(e) => Err(e),
        None => Ok(out),
    }
}

/// Remplace chaque `n%` par n/100. N’échoue jamais.
pub fn resolve_percent(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len());
    balayer(expr, '%', false, |morceau| {
        match morceau {
            Morceau::Texte(c) => out.push(c),
            Morceau::Motif { litteral, brut, .. } => match pourcent_texte(litteral) {
                Some(txt) => out.push_str(&txt),
                None => out.push_str(brut),
            },
        }
    });
    out
}

/* ------------------------ Balayage ------------------------ */

/// Élément rendu par [`balayer`].
enum Morceau<'a> {
    /// Caractère hors motif, recopié tel quel.
    Texte(char),
    /// `littéral + suffixe(s)` ; `brut` = le motif complet.
    Motif {
        litteral: &'a str,
        brut: &'a str,
        suffixes: usize,
    },
}

/// Balaye `expr` à la recherche de `littéral + suffixe`.
/// - `tous` : consomme tous les suffixes consécutifs (sinon un seul)
fn balayer<F>(expr: &str, suffixe: char, tous: bool, mut f: F)
where
    F: FnMut(Morceau<'_>),
{
    let indices: Vec<(usize, char)> = expr.char_indices().collect();
    let chars: Vec<char> = indices.iter().map(|&(_, c)| c).collect();
    let octet = |i: usize| indices.get(i).map_or(expr.len(), |&(o, _)| o);
    let mut i: usize = 0;

    while i < chars.len() {
        let Some(fin_litteral) = litteral_suivi_de(&chars, i, suffixe) else {
            f(Morceau::Texte(chars[i]));
            i += 1;
            continue;
        };

        let mut fin = fin_litteral + 1;
        if tous {
            while fin < chars.len() && chars[fin] == suffixe {
                fin += 1;
            }
        }

        f(Morceau::Motif {
            litteral: &expr[octet(i)..octet(fin_litteral)],
            brut: &expr[octet(i)..octet(fin)],
            suffixes: fin - fin_litteral,
        });
        i = fin;
    }
}

/// Si un littéral `\d+(\.\d+)?` commence en `i` et est suivi de `suffixe`,
/// renvoie l’indice de fin du littéral (position du suffixe).
fn litteral_suivi_de(chars: &[char], i: usize, suffixe: char) -> Option<usize> {
    let chiffres_depuis = |mut j: usize| {
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    if !chars.get(i)?.is_ascii_digit() {
        return None;
    }
    let fin_entier = chiffres_depuis(i);

    // partie décimale (au moins un chiffre après le point)
    if chars.get(fin_entier) == Some(&'.')
        && chars.get(fin_entier + 1).is_some_and(|c| c.is_ascii_digit())
    {
        let fin_dec = chiffres_depuis(fin_entier + 1);
        if chars.get(fin_dec) == Some(&suffixe) {
            return Some(fin_dec);
        }
    }

    (chars.get(fin_entier) == Some(&suffixe)).then_some(fin_entier)
}

/* ------------------------ Décimal exact ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// "12.50" -> 1250/100 (exact). None si le texte n’est pas un décimal simple.
fn lire_decimal(txt: &str) -> Option<BigRational> {
    let (ent, frac) = txt.split_once('.').unwrap_or((txt, ""));
    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    Some(BigRational::new(n, pow10(frac.len())))
}

/// r -> texte décimal tronqué à `digits` chiffres après la virgule.
/// Exact dès que r * 10^digits est entier.
fn vers_texte_decimal(r: &BigRational, digits: usize) -> String {
    let mut scaled = (r.numer() * pow10(digits)) / r.denom();
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };
    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    format!("{signe}{int_part}.{frac}")
}

/* ------------------------ Valeurs ------------------------ */

fn factorielle_texte(litteral: &str) -> Result<String, ErreurCalc> {
    let invalide = || ErreurCalc::FactorielleInvalide {
        operande: litteral.to_string(),
    };

    let r = lire_decimal(litteral).ok_or_else(invalide)?;
    if r.is_negative() || !r.is_integer() {
        return Err(invalide());
    }

    let valeur = match r.to_integer().to_u64() {
        Some(n) if n <= FACTORIELLE_MAX_F64 => factorielle(n).to_f64().unwrap_or(f64::INFINITY),
        _ => f64::INFINITY,
    };
    Ok(texte_valeur(valeur))
}

/// Produit itératif : 0! = 1! = 1, sinon 2·3·…·n.
fn factorielle(n: u64) -> BigUint {
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc *= k;
    }
    acc
}

fn pourcent_texte(litteral: &str) -> Option<String> {
    let r = lire_decimal(litteral)? / BigRational::from_integer(BigInt::from(100));
    let digits = litteral.split_once('.').map_or(0, |(_, f)| f.len()) + 2;

    let exact = vers_texte_decimal(&r, digits);
    let v: f64 = exact.parse().ok()?;
    if v.is_zero() {
        return Some("0".to_string());
    }
    Some(texte_valeur(v))
}
