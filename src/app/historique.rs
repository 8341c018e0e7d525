//! src/app/historique.rs
//!
//! Historique borné (10 entrées, plus récente en tête) + persistance.
//!
//! Contrats :
//! - Lecture tolérante : stockage absent / illisible / JSON corrompu => historique vide, jamais d’erreur.
//! - Écriture faillible (Result) : l’appelant journalise et garde l’historique en mémoire.
//! - Format JSON compatible avec l’ancienne clé localStorage : [{"expression": "...", "result": "..."}]

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Nombre maximal d’entrées conservées.
pub const CAPACITE_HISTORIQUE: usize = 10;

/// Clé localStorage (wasm).
#[cfg(target_arch = "wasm32")]
pub const CLE_LOCAL_STORAGE: &str = "calculatorHistory";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    #[serde(rename = "result")]
    pub resultat: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

#[derive(Debug, Error)]
pub enum ErreurStockage {
    #[error("accès au fichier d’historique: {0}")]
    Io(#[from] std::io::Error),

    #[error("historique illisible: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stockage indisponible")]
    Indisponible,
}

/// Où vit l’historique persistant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stockage {
    /// Rien n’est persisté (tests, --sans-historique).
    Memoire,
    /// Fichier JSON (natif).
    Fichier(PathBuf),
    /// localStorage du navigateur (wasm).
    #[cfg(target_arch = "wasm32")]
    Local,
}

impl Stockage {
    /// Natif : <data_dir>/calculatrice_sci/historique.json (ou mémoire si data_dir inconnu).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn par_defaut() -> Stockage {
        dirs::data_dir()
            .map(|d| Stockage::Fichier(d.join("calculatrice_sci").join("historique.json")))
            .unwrap_or(Stockage::Memoire)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn par_defaut() -> Stockage {
        Stockage::Local
    }

    /// Texte brut stocké, None si rien n’a encore été écrit.
    fn lire(&self) -> Result<Option<String>, ErreurStockage> {
        match self {
            Stockage::Memoire => Ok(None),
            Stockage::Fichier(chemin) => match std::fs::read_to_string(chemin) {
                Ok(txt) => Ok(Some(txt)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            },
            #[cfg(target_arch = "wasm32")]
            Stockage::Local => local_storage()?
                .get_item(CLE_LOCAL_STORAGE)
                .map_err(|_| ErreurStockage::Indisponible),
        }
    }

    fn ecrire(&self, txt: &str) -> Result<(), ErreurStockage> {
        match self {
            Stockage::Memoire => Ok(()),
            Stockage::Fichier(chemin) => {
                if let Some(parent) = chemin.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(chemin, txt)?;
                Ok(())
            }
            #[cfg(target_arch = "wasm32")]
            Stockage::Local => local_storage()?
                .set_item(CLE_LOCAL_STORAGE, txt)
                .map_err(|_| ErreurStockage::Indisponible),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, ErreurStockage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ErreurStockage::Indisponible)
}

impl Historique {
    /// Ajoute en tête ; la plus ancienne entrée est évincée au-delà de la capacité.
    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        self.entrees.insert(0, entree);
        self.entrees.truncate(CAPACITE_HISTORIQUE);
    }

    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    /// Restaure l’historique. Tout échec donne un historique vide.
    pub fn charger(stockage: &Stockage) -> Historique {
        let brut = match stockage.lire() {
            Ok(Some(txt)) => txt,
            Ok(None) => return Historique::default(),
            Err(e) => {
                debug!(%e, "historique non lu, départ à vide");
                return Historique::default();
            }
        };

        match serde_json::from_str::<Historique>(&brut) {
            Ok(mut h) => {
                h.entrees.truncate(CAPACITE_HISTORIQUE);
                h
            }
            Err(e) => {
                debug!(%e, "historique corrompu, départ à vide");
                Historique::default()
            }
        }
    }

    pub fn sauvegarder(&self, stockage: &Stockage) -> Result<(), ErreurStockage> {
        let txt = serde_json::to_string(self)?;
        stockage.ecrire(&txt)
    }
}
