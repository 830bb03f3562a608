// src/gui/app.rs
use crate::{logd, loge, logf};
use std::{
    error::Error,
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    csv,
    filter::{self, FilterState},
    normalize,
    roster::Roster,
    store,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Dienstplan Filter",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical roster; normalized once per dataset, before any filtering
    pub roster: Roster,

    // live filter fields (transient; die with the app)
    pub filters: FilterState,

    // projection: indices of visible rows, rebuilt on every filter pass
    pub row_ix: Vec<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        // canonical cache from disk, if any
        let mut roster = match store::load_roster() {
            Ok(r) if !r.rows.is_empty() => {
                logf!("Cache: Loaded {} row(s)", r.rows.len());
                status = s!("Loaded local data");
                r
            }
            Ok(_) => Roster::default(),
            Err(e) => {
                logd!("Cache: Missing ({})", e);
                Roster::default()
            }
        };

        // Normalize before the first filter pass; the date filter reads
        // propagated cells.
        normalize::normalize(&mut roster.rows);

        // all-visible baseline
        let filters = FilterState::default();
        filter::apply(&mut roster.rows, &filters);
        let row_ix = filter::visible_indices(&roster.rows);

        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!("Init: rows={}", roster.rows.len());

        Self {
            state,
            roster,
            filters,
            row_ix,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(status)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Full visibility pass against the current filter fields.
    /// Called on every filter edit and on reset; no other code path.
    pub fn refilter(&mut self) {
        filter::apply(&mut self.roster.rows, &self.filters);
        self.row_ix = filter::visible_indices(&self.roster.rows);

        if self.filters.is_empty() {
            self.status(format!("{} row(s)", self.row_ix.len()));
        } else {
            self.status(format!(
                "{} of {} row(s)",
                self.row_ix.len(),
                self.roster.rows.len()
            ));
        }
    }

    /// Swap in a freshly fetched roster: cache the raw table, normalize
    /// once, then re-apply whatever is currently typed in the filters.
    pub fn set_roster(&mut self, raw: Roster) {
        match store::save_roster(&raw) {
            Ok(p) => logd!("Cache: Saved {}", p.display()),
            Err(e) => loge!("Cache: Save failed: {}", e),
        }

        self.roster = raw;
        normalize::normalize(&mut self.roster.rows);
        self.refilter();
    }

    /* ---------- export ---------- */

    pub fn export_string(&self) -> String {
        let export = &self.state.options.export;
        let headers = Some(self.roster.headers_for_display());
        let width = headers.as_ref().map(|h| h.len()).unwrap_or(0);
        let cells = self.roster.cells(export.visible_only, width);
        if cells.is_empty() {
            return s!();
        }
        csv::to_export_string(&headers, &cells, export.include_headers, export.delim())
    }

    pub fn write_export(&self) -> Result<PathBuf, Box<dyn Error>> {
        let txt = self.export_string();
        if txt.is_empty() {
            return Err("Nothing to export".into());
        }

        let path = self.state.options.export.out_path();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&path, txt)?;
        Ok(path)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Filter bar pinned above the table.
        egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
            components::filter_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let msg = self.status.lock().unwrap().clone();
            ui.label(msg);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
