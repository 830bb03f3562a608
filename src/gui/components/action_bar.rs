// src/gui/components/action_bar.rs

use crate::{logd, loge, logf};
use eframe::egui;

use crate::config::options::ExportFormat;
use crate::gui::app::App;
use crate::roster;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.checkbox(&mut export.include_headers, "Include headers");
            ui.checkbox(&mut export.visible_only, "Filtered rows only");
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }

        // Copy
        if ui.button("Copy").clicked() {
            let txt = app.export_string();
            if txt.is_empty() {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but there's nothing to copy");
            } else {
                ui.ctx().copy_text(txt);
                app.status("Copied to clipboard");
            }
        }

        // Export
        if ui.button("Export").clicked() {
            if app.out_path_dirty {
                app.state.options.export.set_path(&app.out_path_text);
                logf!(
                    "Export: Out path set → {}",
                    app.state.options.export.out_path().display()
                );
                app.out_path_dirty = false;
            }

            match app.write_export() {
                Ok(p) => {
                    logf!("Export: OK {}", p.display());
                    app.status(format!("Exported {}", p.display()));
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    app.status(format!("Export error: {e}"));
                }
            }
        }

        // FETCH
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(
                egui::Button::new(egui::RichText::new("FETCH").color(black).strong())
                    .fill(red),
            )
            .clicked()
        {
            logf!("Fetch: Begin");
            app.status("Fetching…");

            match roster::fetch() {
                Ok(r) => {
                    logf!("Fetch: OK rows={}", r.rows.len());
                    app.set_roster(r);
                }
                Err(e) => {
                    loge!("Fetch: Error: {}", e);
                    app.status(format!("Fetch error: {e}"));
                }
            }
        }
    });
}
