// src/main.rs
//
// Calculatrice scientifique — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : options clap, journal tracing, eframe::run_native
//   (ou évaluation unique sans fenêtre avec --eval)
// - WEB  (wasm32)              : eframe::WebRunner + <canvas>, historique en localStorage
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice scientifique";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::app::historique::Stockage;
    use crate::noyau::{self, Mode};

    /// Calculatrice scientifique (DEG/RAD, n!, %, historique).
    #[derive(Parser, Debug)]
    #[command(version, about)]
    pub struct Options {
        /// Démarrer en radians (degrés par défaut)
        #[arg(long)]
        pub radians: bool,

        /// Fichier d’historique (défaut : <données>/calculatrice_sci/historique.json)
        #[arg(long, value_name = "FICHIER", conflicts_with = "sans_historique")]
        pub historique: Option<PathBuf>,

        /// Ne rien persister
        #[arg(long)]
        pub sans_historique: bool,

        /// Évaluer une expression, afficher le résultat et quitter (sans fenêtre)
        #[arg(long, value_name = "EXPR")]
        pub eval: Option<String>,
    }

    impl Options {
        pub fn mode(&self) -> Mode {
            if self.radians {
                Mode::Radians
            } else {
                Mode::Degres
            }
        }

        pub fn stockage(&self) -> Stockage {
            match (&self.historique, self.sans_historique) {
                (_, true) => Stockage::Memoire,
                (Some(chemin), false) => Stockage::Fichier(chemin.clone()),
                (None, false) => Stockage::par_defaut(),
            }
        }
    }

    /// Journal : RUST_LOG sinon "warn".
    pub fn installer_journal() {
        use tracing_subscriber::EnvFilter;

        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    /// --eval : affiche le résultat formaté. Code 1 si "Error".
    pub fn evaluer_une_fois(expr: &str, mode: Mode) -> std::process::ExitCode {
        let resultat = match noyau::evaluate(expr, mode) {
            Ok(None) => return std::process::ExitCode::SUCCESS,
            Ok(Some(v)) => Ok(v),
            Err(e) => {
                tracing::info!(%e, "évaluation refusée");
                Err(e)
            }
        };

        let texte = noyau::format_result(&resultat);
        println!("{texte}");
        if texte == noyau::ERREUR {
            std::process::ExitCode::FAILURE
        } else {
            std::process::ExitCode::SUCCESS
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    let options = natif::Options::parse();
    natif::installer_journal();

    if let Some(expr) = &options.eval {
        return natif::evaluer_une_fois(expr, options.mode());
    }

    let (mode, stockage) = (options.mode(), options.stockage());
    tracing::info!(?mode, ?stockage, "démarrage");

    let viewport = egui::ViewportBuilder::default()
        .with_title(TITRE_APP)
        .with_inner_size([400.0, 760.0])
        .with_min_inner_size([380.0, 600.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let res = eframe::run_native(
        TITRE_APP,
        native_options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(mode, stockage)))),
    );

    match res {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(%e, "fenêtre impossible");
            std::process::ExitCode::FAILURE
        }
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};
    use crate::app::historique::Stockage;
    use crate::noyau::Mode;

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus, historique en localStorage
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(AppCalc::new(Mode::default(), Stockage::Local)))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
