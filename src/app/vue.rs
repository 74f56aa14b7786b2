// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran en lecture seule, aligné à droite, monospace
// - Au-dessus : opération en attente ("12.0 +") + "." si virgule en attente
// - Pavé d’origine :
//     7 8 9 / C
//     4 5 6 *
//     1 2 3 - =
//     0   . +
// - Chaque clic devient une `Touche` envoyée à AppCalc (aucun calcul ici)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Chiffre, Operateur, Touche};

const TAILLE_BOUTON: [f32; 2] = [48.0, 32.0];
const TAILLE_ECRAN: f32 = 22.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                // opération en cours (vide au repos)
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.indicateur())
                            .monospace()
                            .small()
                            .weak(),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.ecran())
                            .monospace()
                            .size(TAILLE_ECRAN),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.boutons_chiffres(ui, [7, 8, 9]);
            self.bouton(ui, Touche::Operateur(Operateur::Divise));
            self.bouton(ui, Touche::Effacer);
        });
        ui.horizontal(|ui| {
            self.boutons_chiffres(ui, [4, 5, 6]);
            self.bouton(ui, Touche::Operateur(Operateur::Fois));
        });
        ui.horizontal(|ui| {
            self.boutons_chiffres(ui, [1, 2, 3]);
            self.bouton(ui, Touche::Operateur(Operateur::Moins));
            self.bouton(ui, Touche::Egal);
        });
        ui.horizontal(|ui| {
            // "0" occupe deux colonnes
            let large = [
                TAILLE_BOUTON[0] * 2.0 + ui.spacing().item_spacing.x,
                TAILLE_BOUTON[1],
            ];
            if let Some(zero) = Chiffre::new(0) {
                self.bouton_taille(ui, Touche::Chiffre(zero), large);
            }
            self.bouton(ui, Touche::Virgule);
            self.bouton(ui, Touche::Operateur(Operateur::Plus));
        });
    }

    fn boutons_chiffres(&mut self, ui: &mut egui::Ui, chiffres: [u8; 3]) {
        for d in chiffres.into_iter().filter_map(Chiffre::new) {
            self.bouton(ui, Touche::Chiffre(d));
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        self.bouton_taille(ui, touche, TAILLE_BOUTON);
    }

    fn bouton_taille(&mut self, ui: &mut egui::Ui, touche: Touche, taille: [f32; 2]) {
        let resp = ui.add_sized(taille, egui::Button::new(touche.libelle()));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
