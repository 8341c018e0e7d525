// src/noyau/jetons.rs
//
// Tokenisation de la forme CANONIQUE (sortie de reecriture + postfixe).
// Supporte:
// - nombres décimaux (ex: 12, 0.5, .5, 5.)
// - opérateurs + - * / et ** (puissance)
// - parenthèses ( )
// - noms internes de fonctions (sin, cos, tan, asin, acos, atan, log10, ln, sqrt)
//
// Tout le reste (π non réécrit, '!' non résolu, '%', "inf", identifiants inconnus)
// est une erreur de syntaxe.

use super::erreur::ErreurCalc;
use super::fonctions::Fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Fonc(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    StarStar, // **

    // Moins unaire : jamais produit par tokenize(), injecté par to_rpn()
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne canonique en jetons.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    out.push(Tok::StarStar);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : \d+(\.\d*)? | \.\d+
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let txt: String = chars[start..i].iter().collect();
            if txt == "." {
                return Err(ErreurCalc::syntaxe("point décimal isolé"));
            }
            let v: f64 = txt
                .parse()
                .map_err(|_| ErreurCalc::syntaxe(format!("nombre invalide: {txt}")))?;
            out.push(Tok::Num(v));
            continue;
        }

        // Identifiants : [a-zA-Z][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            let f = Fonction::depuis_nom_interne(&mot)
                .ok_or_else(|| ErreurCalc::syntaxe(format!("identifiant inconnu: {mot}")))?;
            out.push(Tok::Fonc(f));
            continue;
        }

        return Err(ErreurCalc::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => v.to_string(),
            Tok::Fonc(f) => f.nom_interne().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::StarStar => "**".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::{format_tokens, tokenize, Tok};
    use crate::noyau::fonctions::Fonction;

    #[test]
    fn nombres_et_operateurs() {
        let t = tokenize("2**(3+1.5) / .5").unwrap();
        assert_eq!(
            t,
            vec![
                Tok::Num(2.0),
                Tok::StarStar,
                Tok::LPar,
                Tok::Num(3.0),
                Tok::Plus,
                Tok::Num(1.5),
                Tok::RPar,
                Tok::Slash,
                Tok::Num(0.5),
            ]
        );
    }

    #[test]
    fn fonctions_internes() {
        let t = tokenize("log10(100)*sqrt(4)").unwrap();
        assert_eq!(t[0], Tok::Fonc(Fonction::Log10));
        assert_eq!(t[5], Tok::Fonc(Fonction::Sqrt));
        assert_eq!(format_tokens(&t), "log10 ( 100 ) * sqrt ( 4 )");
    }

    #[test]
    fn jetons_refuses() {
        assert!(tokenize("5!!").is_err());
        assert!(tokenize("50%").is_err());
        assert!(tokenize("inf").is_err());
        assert!(tokenize("π").is_err());
        assert!(tokenize("log(2)").is_err()); // nom de saisie, pas canonique
        assert!(tokenize("1 + .").is_err());
    }

    #[test]
    fn point_final_accepte() {
        assert_eq!(tokenize("5.").unwrap(), vec![Tok::Num(5.0)]);
    }
}
