// src/roster.rs
use crate::logd;
use std::error::Error;

use crate::config::consts::{NAME_CELL_CLASS, NAME_SLOTS, PAGE_PATH, ROW_CLASS_PREFIX};
use crate::core::net;
use crate::core::html::{
    inner_after_open_tag, next_tag_block_ci, strip_tags, tag_class_starts_with, tag_has_class,
};
use crate::core::sanitize::normalize_entities;

/// One duty entry as rendered in the roster table.
///
/// `day`/`date` come from the two leading cells and may be blank in the raw
/// page (blank = "same day as the row above"); `normalize` fills the blanks.
/// `names` holds every position cell in document order, however many the row
/// has; only the first [`NAME_SLOTS`] are individually filterable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub day: String,
    pub date: String,
    pub names: Vec<String>,
    /// Day/date were filled in from the preceding header-of-day row.
    pub derived: bool,
    /// Current filter verdict. Rows start visible.
    pub visible: bool,
}

impl Row {
    pub fn new(day: String, date: String, names: Vec<String>) -> Self {
        Self { day, date, names, derived: false, visible: true }
    }

    /// Text of the i-th position cell; absent cells read as empty.
    pub fn name_at(&self, i: usize) -> &str {
        self.names.get(i).map(String::as_str).unwrap_or("")
    }

    /// All position cells joined for the combined name filter.
    /// Space-joined so a term can never straddle two cells.
    pub fn all_names(&self) -> String {
        let mut out = s!();
        for n in &self.names {
            if !out.is_empty() { out.push(' '); }
            out.push_str(n.trim());
        }
        out
    }

    /// Flatten to the cache/export column shape: day, date, names…
    pub fn to_cells(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(2 + self.names.len());
        out.push(self.day.clone());
        out.push(self.date.clone());
        out.extend(self.names.iter().cloned());
        out
    }

    /// Rebuild from cached cells. Fewer than two cells degrade to empties.
    pub fn from_cells(cells: Vec<String>) -> Self {
        let mut it = cells.into_iter();
        let day = it.next().unwrap_or_default();
        let date = it.next().unwrap_or_default();
        Self::new(day, date, it.collect())
    }
}

/// Parsed roster table (shapes neatly into the store/export paths).
/// The page ships no usable header row; display headers are derived
/// from the data shape via `headers_for_display`.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    pub rows: Vec<Row>,
}

const HEADERS: [&str; 2 + NAME_SLOTS] = [
    "Tag", "Datum", "Lenker", "Teamleiter", "Dritter", "Vierter",
];

impl Roster {
    /// Widest name-cell count across the roster.
    pub fn max_names(&self) -> usize {
        self.rows.iter().map(|r| r.names.len()).max().unwrap_or(0)
    }

    /// Column headers sized to the data: the known roles, then "Pos N"
    /// for any overflow columns some rows carry.
    pub fn headers_for_display(&self) -> Vec<String> {
        let ncols = 2 + self.max_names().max(NAME_SLOTS);
        let mut out: Vec<String> = HEADERS.iter().map(|h| s!(*h)).collect();
        for i in out.len()..ncols {
            out.push(format!("Pos {}", i - 1));
        }
        out
    }

    /// Materialize rows for export, padded to `width` so short rows line
    /// up under the headers. `visible_only` keeps just the rows passing
    /// the current filters.
    pub fn cells(&self, visible_only: bool, width: usize) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .filter(|r| !visible_only || r.visible)
            .map(|r| {
                let mut c = r.to_cells();
                while c.len() < width {
                    c.push(s!());
                }
                c
            })
            .collect()
    }
}

/// Fetch and parse the live roster page.
pub fn fetch() -> Result<Roster, Box<dyn Error>> {
    let html_doc = net::http_get(PAGE_PATH)?;
    let t = std::time::Instant::now();
    let out = parse_doc(&html_doc);
    logd!("Roster: Parse {} in {:?}", PAGE_PATH, t.elapsed());
    Ok(out)
}

/// Split out for unit tests.
pub fn parse_doc(html_doc: &str) -> Roster {
    let mut rows_out: Vec<Row> = Vec::new();

    // Walk each <tr …>…</tr> block; duty rows carry class="dienstidNNN".
    let mut tr_pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(html_doc, "<tr", "</tr>", tr_pos) {
        let tr_block = &html_doc[tr_s..tr_e];
        tr_pos = tr_e;

        if !tag_class_starts_with(tr_block, ROW_CLASS_PREFIX) {
            continue; // header/spacer row; skip
        }

        // Gather TD blocks
        let mut tds: Vec<&str> = Vec::with_capacity(8);
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr_block, "<td", "</td>", td_pos) {
            tds.push(&tr_block[td_s..td_e]);
            td_pos = td_e;
        }
        if tds.len() < 2 {
            continue; // defensive: need at least day + date cells
        }

        let day = cell_text(tds[0]);
        let date = cell_text(tds[1]);

        // Position cells are selected by class, not position: the rows also
        // carry time/vehicle cells we don't model.
        let names: Vec<String> = tds
            .iter()
            .filter(|td| tag_has_class(td, NAME_CELL_CLASS))
            .map(|td| cell_text(td))
            .collect();

        rows_out.push(Row::new(day, date, names));
    }

    Roster { rows: rows_out }
}

fn cell_text(td_block: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(td_block)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_duty_rows_and_position_cells() {
        let doc = r#"
            <html><body><table id="dpl">
              <tr><th>Tag</th><th>Datum</th><th>Zeit</th><th>Lenker</th></tr>
              <tr class="dienstid4711">
                <td>Mo</td><td>01.01.</td>
                <td>06:00</td>
                <td class="dpl_pos">HA M&uuml;ller</td>
                <td class="dpl_pos">Weber</td>
              </tr>
              <tr class="dienstid4712">
                <td></td><td></td>
                <td>12:00</td>
                <td class="dpl_pos">Huber</td>
              </tr>
            </table></body></html>
        "#;

        let out = parse_doc(doc);
        assert_eq!(out.rows.len(), 2);

        let r = &out.rows[0];
        assert_eq!(r.day, "Mo");
        assert_eq!(r.date, "01.01.");
        assert_eq!(r.names, vec![s!("HA Müller"), s!("Weber")]);
        assert!(!r.derived);
        assert!(r.visible);

        // Second row: blank day/date as delivered, one position cell.
        let r = &out.rows[1];
        assert_eq!(r.day, "");
        assert_eq!(r.date, "");
        assert_eq!(r.names, vec![s!("Huber")]);
    }

    #[test]
    fn skips_rows_without_duty_class_or_cells() {
        let doc = r#"
            <table>
              <tr class="kopfzeile"><td>Mo</td><td>01.01.</td></tr>
              <tr class="dienstid1"><td>alone</td></tr>
              <tr class="dienstid2"><td>Di</td><td>02.01.</td></tr>
            </table>
        "#;
        let out = parse_doc(doc);
        assert_eq!(out.rows.len(), 1);
        assert_eq!(out.rows[0].date, "02.01.");
        assert!(out.rows[0].names.is_empty());
    }

    #[test]
    fn strips_markup_inside_cells() {
        let doc = r#"
            <tr class="dienstid9">
              <td><b>Sa</b></td>
              <td>  04.01. </td>
              <td class="dpl_pos"><a href="x.php?i=1">Gro&szlig;</a>&nbsp;</td>
            </tr>
        "#;
        let out = parse_doc(doc);
        assert_eq!(out.rows[0].day, "Sa");
        assert_eq!(out.rows[0].date, "04.01.");
        assert_eq!(out.rows[0].names, vec![s!("Groß")]);
    }

    #[test]
    fn headers_pad_for_extra_position_cells() {
        let mut roster = parse_doc("");
        roster.rows.push(Row::new(s!("Mo"), s!("01.01."), vec![s!(); 6]));
        let h = roster.headers_for_display();
        assert_eq!(h.len(), 8);
        assert_eq!(h[0], "Tag");
        assert_eq!(h[5], "Vierter");
        assert_eq!(h[6], "Pos 5");
        assert_eq!(h[7], "Pos 6");
    }
}
