//! src/app/etat.rs
//!
//! État UI (sans vue) : contexte unique, possédé par l’application.
//!
//! Rôle : contenir l’état de la calculatrice (expression, affichage, mémoire, mode,
//! historique) et offrir les actions des touches. L’évaluation est déléguée au noyau.
//!
//! Contrats :
//! - Le noyau ne garde rien entre deux appels : tout l’état vit ici.
//! - Une évaluation ratée affiche "Error" sans toucher à l’historique ni au mode.
//! - Une expression vide ne change rien.
//! - Les échecs de persistance sont journalisés puis ignorés.

use tracing::{debug, warn};

use super::historique::{EntreeHistorique, Historique, Stockage};
use crate::noyau::{self, Demarche, Mode};

/// Affichage initial / après AC.
const RESULTAT_INITIAL: &str = "0";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sorties ---
    pub resultat: String,
    pub demarche: Demarche,

    // --- état persistant le temps de la session ---
    pub memoire: f64,
    pub mode: Mode,
    pub historique: Historique,

    stockage: Stockage,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Mode::default(), Stockage::Memoire)
    }
}

impl AppCalc {
    /// Crée l’état et restaure l’historique (vide si stockage absent ou corrompu).
    pub fn new(mode: Mode, stockage: Stockage) -> Self {
        let historique = Historique::charger(&stockage);
        debug!(entrees = historique.len(), ?stockage, "historique restauré");

        Self {
            expression: String::new(),
            resultat: RESULTAT_INITIAL.to_string(),
            demarche: Demarche::default(),
            memoire: 0.0,
            mode,
            historique,
            stockage,
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un jeton de saisie (chiffre, opérateur, "sin(", "π", ...).
    pub fn inserer(&mut self, valeur: &str) {
        self.expression.push_str(valeur);
    }

    /// Touche clavier imprimable -> saisie (p = π).
    pub fn touche_clavier(&mut self, c: char) {
        match c {
            '0'..='9' | '+' | '-' | '*' | '/' | '.' | '(' | ')' | '%' | '^' => {
                self.expression.push(c)
            }
            'p' => self.inserer("π"),
            'e' => self.inserer("e"),
            '=' => self.egal(),
            _ => {}
        }
    }

    /// ⌫ : retire le dernier caractère.
    pub fn backspace(&mut self) {
        self.expression.pop();
    }

    /// AC : expression + affichage.
    pub fn ac(&mut self) {
        self.expression.clear();
        self.resultat = RESULTAT_INITIAL.to_string();
    }

    /// C : expression seulement.
    pub fn c(&mut self) {
        self.expression.clear();
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" : évalue, affiche, historise, persiste.
    pub fn egal(&mut self) {
        match noyau::evaluate_detail(&self.expression, self.mode) {
            Ok(None) => {}
            Ok(Some((valeur, d))) => {
                let affiche = noyau::format_number(valeur);
                self.historique.ajouter(EntreeHistorique {
                    expression: std::mem::take(&mut self.expression),
                    resultat: affiche.clone(),
                });
                self.resultat = affiche;
                self.demarche = d;
                self.persister();
            }
            Err(e) => {
                debug!(expression = %self.expression, %e, "évaluation refusée");
                self.resultat = noyau::ERREUR.to_string();
                self.demarche = Demarche::default();
            }
        }
    }

    pub fn basculer_mode(&mut self) {
        self.mode = self.mode.basculer();
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn mc(&mut self) {
        self.memoire = 0.0;
    }

    pub fn mr(&mut self) {
        let txt = self.memoire.to_string();
        self.inserer(&txt);
    }

    pub fn m_plus(&mut self) {
        self.memoire += self.resultat_numerique();
    }

    pub fn m_moins(&mut self) {
        self.memoire -= self.resultat_numerique();
    }

    /// Valeur de l’affichage ("Error" ou illisible => 0).
    fn resultat_numerique(&self) -> f64 {
        self.resultat
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /* ------------------------ Historique ------------------------ */

    /// Reprend le résultat d’une entrée comme nouvelle expression.
    pub fn rappeler(&mut self, index: usize) {
        if let Some(e) = self.historique.get(index) {
            self.expression = e.resultat.clone();
            self.resultat = e.resultat.clone();
        }
    }

    pub fn effacer_historique(&mut self) {
        self.historique.vider();
        self.persister();
    }

    fn persister(&self) {
        if let Err(e) = self.historique.sauvegarder(&self.stockage) {
            warn!(%e, "historique non sauvegardé (conservé en mémoire)");
        }
    }
}
