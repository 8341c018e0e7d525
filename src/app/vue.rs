// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : expression, résultat, indicateur DEG/RAD
// - Pavé : mémoire, fonctions, constantes, postfixés, chiffres, opérateurs, AC/C/⌫, =
// - Historique cliquable (reprend le résultat) + Démarche repliable
//
// Aucune logique ici : chaque touche appelle une action de etat.rs.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Mode;

const ROUGE_DEG: egui::Color32 = egui::Color32::from_rgb(0xe7, 0x4c, 0x3c);
const BLEU_RAD: egui::Color32 = egui::Color32::from_rgb(0x34, 0x98, 0xdb);

#[derive(Clone, Copy, Debug)]
enum Action {
    Ac,
    C,
    Backspace,
    Egal,
    Mc,
    Mr,
    MPlus,
    MMoins,
    Mode,
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Inserer(&'static str),
    Action(Action),
}

use Touche::{Action as A, Inserer as I};

/// Pavé : (libellé, touche), 5 colonnes.
const PAVE: [[(&str, Touche); 5]; 8] = [
    [
        ("MC", A(Action::Mc)),
        ("MR", A(Action::Mr)),
        ("M+", A(Action::MPlus)),
        ("M-", A(Action::MMoins)),
        ("DEG/RAD", A(Action::Mode)),
    ],
    [
        ("sin", I("sin(")),
        ("cos", I("cos(")),
        ("tan", I("tan(")),
        ("(", I("(")),
        (")", I(")")),
    ],
    [
        ("asin", I("asin(")),
        ("acos", I("acos(")),
        ("atan", I("atan(")),
        ("log", I("log(")),
        ("ln", I("ln(")),
    ],
    [
        ("√", I("√(")),
        ("xʸ", I("^")),
        ("n!", I("!")),
        ("%", I("%")),
        ("π", I("π")),
    ],
    [
        ("7", I("7")),
        ("8", I("8")),
        ("9", I("9")),
        ("÷", I("/")),
        ("AC", A(Action::Ac)),
    ],
    [
        ("4", I("4")),
        ("5", I("5")),
        ("6", I("6")),
        ("×", I("*")),
        ("C", A(Action::C)),
    ],
    [
        ("1", I("1")),
        ("2", I("2")),
        ("3", I("3")),
        ("-", I("-")),
        ("⌫", A(Action::Backspace)),
    ],
    [
        ("0", I("0")),
        (".", I(".")),
        ("e", I("e")),
        ("+", I("+")),
        ("=", A(Action::Egal)),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);

                ui.add_space(8.0);
                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    let couleur = match self.mode {
                        Mode::Degres => ROUGE_DEG,
                        Mode::Radians => BLEU_RAD,
                    };
                    ui.colored_label(couleur, self.mode.libelle());
                    ui.monospace(if self.expression.is_empty() {
                        " "
                    } else {
                        self.expression.as_str()
                    });
                });

                ui.label(egui::RichText::new(&self.resultat).size(28.0).monospace());
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (libelle, touche) in rangee {
                        self.bouton(ui, libelle, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: Touche) {
        let resp = ui.add_sized([64.0, 36.0], egui::Button::new(libelle));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Inserer(txt) => self.inserer(txt),
            Touche::Action(a) => match a {
                Action::Ac => self.ac(),
                Action::C => self.c(),
                Action::Backspace => self.backspace(),
                Action::Egal => self.egal(),
                Action::Mc => self.mc(),
                Action::Mr => self.mr(),
                Action::MPlus => self.m_plus(),
                Action::MMoins => self.m_moins(),
                Action::Mode => self.basculer_mode(),
            },
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel: Option<usize> = None;
        let mut effacer = false;

        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.label("(vide)");
                    return;
                }

                for (i, e) in self.historique.entrees().iter().enumerate() {
                    let texte = format!("{}  = {}", e.expression, e.resultat);
                    if ui.button(texte).on_hover_text("Reprendre ce résultat").clicked() {
                        rappel = Some(i);
                    }
                }

                ui.add_space(4.0);
                effacer = ui.button("Effacer l’historique").clicked();
            });

        if let Some(i) = rappel {
            self.rappeler(i);
        }
        if effacer {
            self.effacer_historique();
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                let d = &self.demarche;
                Self::champ_demarche(ui, "Forme canonique", "demarche_canon", &d.canonique);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &d.arbre);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
