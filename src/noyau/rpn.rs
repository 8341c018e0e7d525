// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Précédences (croissantes) : + -  <  * /  <  moins unaire  <  **
// - ** est associatif à droite : 2**3**2 = 2**9
// - -2**2 = -(2**2) ; 2**-1 = 2**(-1)
// - plus unaire : ignoré
//
// Syntaxe vérifiée au passage (valeur attendue / opérateur attendu),
// pour refuser "2 3", "()", "2+", "sin 2", ")(".
//
// Garde-fou : profondeur d’arbre bornée (eval, Display et Drop sont récursifs).

use super::erreur::ErreurCalc;
use super::expr::Expr;
use super::jetons::Tok;

/// Profondeur maximale de l’arbre construit par from_rpn.
pub const MAX_PROFONDEUR: usize = 1000;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::StarStar => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::StarStar | Tok::Neg)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonc(Sin), LPar, Num(30), RPar, Star, Num(2)]
///   rpn:    [Num(30), Fonc(Sin), Num(2), Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les juxtapositions.
    let mut prev_was_value = false;
    // une fonction doit être suivie immédiatement de '('
    let mut attend_lpar = false;

    for tok in tokens.iter().cloned() {
        if attend_lpar && tok != Tok::LPar {
            return Err(ErreurCalc::syntaxe("'(' attendue après une fonction"));
        }
        attend_lpar = false;

        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurCalc::syntaxe("opérateur manquant entre deux valeurs"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Fonc(_) => {
                if prev_was_value {
                    return Err(ErreurCalc::syntaxe("opérateur manquant avant une fonction"));
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(tok);
                attend_lpar = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurCalc::syntaxe("opérateur manquant avant '('"));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurCalc::syntaxe("valeur manquante avant ')'"));
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if top == Tok::LPar {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurCalc::syntaxe("')' sans '(' correspondante"));
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Tok::Fonc(_)) = ops.last() {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // signe unaire : '+' ignoré, '-' devient Neg (préfixe, ne dépile rien)
                if tok == Tok::Minus {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::StarStar => {
                if !prev_was_value {
                    return Err(ErreurCalc::syntaxe("opérande gauche manquante"));
                }
                depiler_operateurs(&mut ops, &mut out, &tok);
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurCalc::syntaxe("jeton Neg inattendu en entrée")),
        }
    }

    if attend_lpar {
        return Err(ErreurCalc::syntaxe("'(' attendue après une fonction"));
    }
    if !prev_was_value {
        return Err(ErreurCalc::syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Tok::LPar {
            return Err(ErreurCalc::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile tant que:
/// - on n'est pas bloqué par '('
/// - et la précédence/associativité exige de sortir l'opérateur du haut
fn depiler_operateurs(ops: &mut Vec<Tok>, out: &mut Vec<Tok>, tok: &Tok) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar | Tok::Fonc(_)) {
            break;
        }

        let p_top = precedence(top);
        let p_tok = precedence(tok);

        let doit_pop = if is_right_associative(tok) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        if !doit_pop {
            break;
        }
        if let Some(op) = ops.pop() {
            out.push(op);
        }
    }
}

/// Construit une Expr à partir d’une RPN.
/// Chaque élément de la pile garde sa profondeur ; au-delà de MAX_PROFONDEUR => Syntaxe.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurCalc> {
    let manque = || ErreurCalc::Evaluation("opérande manquante".into());
    let mut st: Vec<(Expr, usize)> = Vec::new();

    let empiler = |st: &mut Vec<(Expr, usize)>, e: Expr, prof: usize| {
        if prof > MAX_PROFONDEUR {
            return Err(ErreurCalc::syntaxe("expression trop imbriquée"));
        }
        st.push((e, prof));
        Ok(())
    };

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push((Expr::Num(v), 1)),

            Tok::Neg => {
                let (x, p) = st.pop().ok_or_else(manque)?;
                empiler(&mut st, Expr::Neg(Box::new(x)), p + 1)?;
            }

            Tok::Fonc(f) => {
                let (x, p) = st.pop().ok_or_else(manque)?;
                empiler(&mut st, Expr::Appel(f, Box::new(x)), p + 1)?;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::StarStar => {
                let (b, pb) = st.pop().ok_or_else(manque)?;
                let (a, pa) = st.pop().ok_or_else(manque)?;
                let (a, b) = (Box::new(a), Box::new(b));

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    _ => Expr::Pow(a, b),
                };
                empiler(&mut st, e, pa.max(pb) + 1)?;
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalc::Evaluation("parenthèse inattendue en RPN".into()))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some((e, _)), true) => Ok(e),
        _ => Err(ErreurCalc::Evaluation("expression invalide".into())),
    }
}
