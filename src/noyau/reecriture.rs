// src/noyau/reecriture.rs
//
// Réécriture saisie -> forme canonique
// ------------------------------------
// - π            -> 3.141592653589793
// - e (mot seul) -> 2.718281828459045
// - sin( cos( tan( asin( acos( atan( log( ln( √(  -> noms internes (log10, sqrt, ...)
// - ^            -> **
// - ! et %       : laissés tels quels (résolus par postfixe.rs)
//
// Reconnaissance par jetons entiers (pas de remplacement aveugle de sous-chaînes) :
// "exp" n’est pas touché, seul un mot "e" isolé est une constante.
// Un littéral substitué collé à un chiffre/lettre est séparé par un espace,
// pour que "2π" soit refusé plus loin au lieu de devenir "23.14…".

use std::f64::consts::{E, PI};

use super::fonctions::Fonction;

/// Réécrit une expression saisie vers la forme canonique. Ne échoue jamais :
/// ce qui n’est pas reconnu est recopié tel quel (le tokenizer tranchera).
pub fn rewrite(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len() + 16);
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == 'π' {
            pousser_litteral(&mut out, &PI.to_string(), chars.get(i + 1));
            i += 1;
            continue;
        }

        if c == '^' {
            out.push_str("**");
            i += 1;
            continue;
        }

        // √( -> sqrt(  (la parenthèse est recopiée au tour suivant)
        if c == '√' && chars.get(i + 1) == Some(&'(') {
            out.push_str(Fonction::Sqrt.nom_interne());
            i += 1;
            continue;
        }

        // Mots ASCII : constante e, ou nom de fonction suivi de '('
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();

            if mot == "e" {
                pousser_litteral(&mut out, &E.to_string(), chars.get(i));
                continue;
            }

            if chars.get(i) == Some(&'(') {
                if let Some(f) = Fonction::depuis_saisie(&mot) {
                    out.push_str(f.nom_interne());
                    continue;
                }
            }

            out.push_str(&mot);
            continue;
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Ajoute un littéral numérique en l’isolant de ses voisins (chiffre, lettre, '.').
fn pousser_litteral(out: &mut String, litteral: &str, suivant: Option<&char>) {
    let colle = |c: char| c.is_alphanumeric() || c == '.';

    if out.chars().next_back().is_some_and(colle) {
        out.push(' ');
    }
    out.push_str(litteral);
    if suivant.is_some_and(|&c| colle(c)) {
        out.push(' ');
    }
}
