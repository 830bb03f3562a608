// src/gui/components/data_table.rs
//
// Draws the live table over the visible-row projection. Derived day/date
// cells render dimmed, matching the grey the host page used for filled-in
// cells. Purely a view; all filtering happened before we get here.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

// Host page styles propagated cells with color: #555.
const DERIVED_TEXT: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let headers = app.roster.headers_for_display();
    let cols = headers.len();

    // Reserve space for scroll bars instead of overlaying content.
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("roster_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt("roster_table");

            for ci in 0..cols {
                // Day and date are narrow; name columns get the room.
                let w = match ci {
                    0 => 44.0,
                    1 => 70.0,
                    _ => 150.0,
                };
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in &headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.row_ix.len(), |mut row| {
                        let row_idx = row.index();
                        let Some(&src_ix) = app.row_ix.get(row_idx) else { return };
                        let Some(data) = app.roster.rows.get(src_ix) else { return };

                        for ci in 0..cols {
                            let text = match ci {
                                0 => data.day.as_str(),
                                1 => data.date.as_str(),
                                _ => data.name_at(ci - 2),
                            };
                            let dim = ci < 2 && data.derived;

                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let mut rt = RichText::new(text);
                                if dim {
                                    rt = rt.color(DERIVED_TEXT);
                                }
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(rt);
                                });
                            });
                        }
                    });
                });
        });
}
