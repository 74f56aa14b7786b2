// src/app.rs
//
// Calculatrice immédiate — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, safe natif + web) :
// - texte tapé : chiffres, '.', ',', + - * /, '=', 'c'
// - Enter = "=" ; Escape / Delete = "C"
//
// Important:
// - Enter sur un bouton qui a le focus = clic simulé par egui.
//   Dans ce cas on NE mappe PAS Enter sur "=" (sinon double déclenchement).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl AppCalc {
    fn lire_clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());
        let focus_widget = ctx.memory(|m| m.focused().is_some());

        self.lire_evenements(&evenements, focus_widget);
    }

    fn lire_evenements(&mut self, evenements: &[egui::Event], focus_widget: bool) {
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => self.appuyer_texte(texte),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter if !focus_widget => self.appuyer(Touche::Egal),
                    egui::Key::Escape | egui::Key::Delete => self.appuyer(Touche::Effacer),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.lire_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
