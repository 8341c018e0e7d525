//! Noyau — évaluation (pipeline réel)
//!
//! saisie -> réécriture -> factorielle -> pourcentage -> jetons -> RPN -> Expr -> f64
//!
//! Sans état : seul le mode d’angle accompagne le texte.
//! Entrée vide => Ok(None) (“pas de résultat”, ni erreur ni zéro).

use tracing::debug;

use super::erreur::ErreurCalc;
use super::fonctions::Mode;
use super::jetons::{format_tokens, tokenize};
use super::postfixe::{resolve_factorial, resolve_percent};
use super::reecriture::rewrite;
use super::rpn::{from_rpn, to_rpn};

/// Trace des étapes intermédiaires (panneau “Démarche” de l’UI).
#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub canonique: String,
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

/// API publique : évalue une expression saisie.
///
/// - Ok(None)    : expression vide
/// - Ok(Some(x)) : valeur, éventuellement NaN/±inf (le formatage tranche)
/// - Err(e)      : factorielle invalide ou syntaxe refusée
pub fn evaluate(texte: &str, mode: Mode) -> Result<Option<f64>, ErreurCalc> {
    Ok(evaluate_detail(texte, mode)?.map(|(v, _)| v))
}

/// Comme [`evaluate`], avec la démarche.
pub fn evaluate_detail(
    texte: &str,
    mode: Mode,
) -> Result<Option<(f64, Demarche)>, ErreurCalc> {
    if texte.trim().is_empty() {
        return Ok(None);
    }

    // 1) Constantes + noms de fonctions + ^
    let canonique = rewrite(texte);

    // 2) Postfixés : factorielle d’abord, puis pourcentage
    let canonique = resolve_percent(&resolve_factorial(&canonique)?);
    debug!(entree = texte, %canonique, "réécriture");

    // 3) Jetons -> RPN -> arbre
    let jetons = tokenize(&canonique)?;
    let rpn = to_rpn(&jetons)?;
    let arbre = from_rpn(&rpn)?;

    // 4) Valeur
    let valeur = arbre.eval(mode);
    debug!(?mode, valeur, "évaluation");

    let d = Demarche {
        canonique,
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        arbre: arbre.to_string(),
    };

    Ok(Some((valeur, d)))
}
