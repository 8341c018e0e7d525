// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - FactorielleInvalide : n! avec n négatif ou non entier
// - Syntaxe            : texte canonique non reconnu (jeton, parenthèses, opérande manquante)
// - Evaluation         : arbre incohérent (ne devrait pas arriver après une RPN valide)
//
// Un résultat non fini (NaN, ±inf) n’est PAS une erreur : il passe au formatage.
// Une entrée vide n’est PAS une erreur : evaluate() renvoie Ok(None).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error("factorielle invalide: {operande}! (entier positif attendu)")]
    FactorielleInvalide { operande: String },

    #[error("erreur de syntaxe: {0}")]
    Syntaxe(String),

    #[error("erreur d’évaluation: {0}")]
    Evaluation(String),
}

impl ErreurCalc {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurCalc::Syntaxe(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::ErreurCalc;

    #[test]
    fn messages_lisibles() {
        let e = ErreurCalc::FactorielleInvalide {
            operande: "2.5".into(),
        };
        assert!(e.to_string().contains("2.5!"));

        let e = ErreurCalc::syntaxe("parenthèses non fermées");
        assert_eq!(e.to_string(), "erreur de syntaxe: parenthèses non fermées");
    }
}
