// src/filter.rs
//! The filter engine.
//!
//! Six independent fields (date, combined names, four positional slots),
//! each matched with [`matches`]. A row stays visible iff every field with a
//! non-empty value matches (AND across fields); within one field,
//! comma-separated terms are alternatives (OR across terms).
//!
//! Stateless: every pass reads the full row set plus the current
//! [`FilterState`] and recomputes every verdict. No diffing, no debounce;
//! the pass is synchronous and bounded by the row count.

use crate::config::consts::NAME_SLOTS;
use crate::roster::Row;

/// Raw filter field values, exactly as typed. Empty = no constraint.
/// Lives only for the duration of the run; nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Against the (normalized) date cell.
    pub date: String,
    /// Against all position cells of a row combined.
    pub names: String,
    /// Against single position cells: Lenker, Teamleiter, Dritter, Vierter.
    pub slots: [String; NAME_SLOTS],
}

impl FilterState {
    /// Reset: clear every field. Recomputing afterwards shows every row,
    /// via the same code path as any other filter change.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.date.trim().is_empty()
            && self.names.trim().is_empty()
            && self.slots.iter().all(|v| v.trim().is_empty())
    }
}

/// Term match primitive used for every field.
///
/// The raw value is trimmed and lowercased, then split on commas into
/// terms (each trimmed, empties dropped). True iff any term is a substring
/// of the lowercased target. No terms left (trailing commas, pure
/// whitespace, empty input) means no constraint, so true.
pub fn matches(target_text: &str, raw_filter: &str) -> bool {
    let filter = raw_filter.trim().to_lowercase();
    if filter.is_empty() {
        return true;
    }

    let terms: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if terms.is_empty() {
        return true;
    }

    let target = target_text.to_lowercase();
    terms.iter().any(|t| target.contains(t))
}

/// One row against the whole filter state.
pub fn row_visible(row: &Row, f: &FilterState) -> bool {
    if !matches(row.date.trim(), &f.date) {
        return false;
    }
    if !matches(&row.all_names(), &f.names) {
        return false;
    }
    // Positional slots: an absent cell is matched as an empty target, so a
    // non-empty slot filter drops the row while an empty one passes it.
    f.slots
        .iter()
        .enumerate()
        .all(|(i, slot)| matches(row.name_at(i).trim(), slot))
}

/// Full visibility pass, in place. Only touches the `visible` flag.
pub fn apply(rows: &mut [Row], f: &FilterState) {
    for row in rows.iter_mut() {
        row.visible = row_visible(row, f);
    }
}

/// Positions of visible rows, for index-based table views.
pub fn visible_indices(rows: &[Row]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, r)| r.visible)
        .map(|(i, _)| i)
        .collect()
}
