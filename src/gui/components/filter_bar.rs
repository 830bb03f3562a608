// src/gui/components/filter_bar.rs
//
// The filter inputs: date + combined name up front, the four positional
// fields behind the advanced toggle. Every edit re-runs the full
// visibility pass; Reset clears the fields and runs the very same pass.

use crate::logd;
use eframe::egui;

use crate::config::consts::NAME_SLOTS;
use crate::gui::app::App;

const SLOT_HINTS: [&str; NAME_SLOTS] = ["Lenker", "Teamleiter", "Dritter", "Vierter"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.strong("Filter:");

        changed |= ui
            .add(
                egui::TextEdit::singleline(&mut app.filters.date)
                    .hint_text("Datum")
                    .desired_width(90.0),
            )
            .changed();

        changed |= ui
            .add(
                egui::TextEdit::singleline(&mut app.filters.names)
                    .hint_text("Name (HA MUSTERMANN, MUSTERFRAU, ..)")
                    .desired_width(240.0),
            )
            .changed();

        if ui.button("Reset").clicked() {
            app.filters.clear();
            app.state.gui.show_advanced = false;
            changed = true;
            logd!("UI: Filter reset");
        }

        let label = if app.state.gui.show_advanced {
            "[-] Erweiterte Suche"
        } else {
            "[+] Erweiterte Suche"
        };
        if ui.link(label).clicked() {
            app.state.gui.show_advanced = !app.state.gui.show_advanced;
        }
    });

    if app.state.gui.show_advanced {
        ui.horizontal(|ui| {
            for (slot, hint) in app.filters.slots.iter_mut().zip(SLOT_HINTS) {
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(slot)
                            .hint_text(hint)
                            .desired_width(130.0),
                    )
                    .changed();
            }
        });
    }

    if changed {
        app.refilter();
    }
}
