// src/normalize.rs
//! Date column normalization.
//!
//! The roster page run-length-encodes the day/date column: only the first
//! row of a day carries text, the rows below inherit it visually. One pass
//! here rewrites the blanks so every row reads as a full record, and the
//! date filter never has to special-case inherited cells.

use crate::roster::Row;

/// Fill blank day/date cells from the nearest preceding header-of-day row.
///
/// Single forward sweep over the whole table; the accumulators never reset
/// mid-pass. Must run once per dataset before any filter pass. Running it
/// again is a no-op: after the first pass no date cell is blank (unless the
/// table starts with blanks, which re-derive to the same empty strings).
pub fn normalize(rows: &mut [Row]) {
    // Sweep state, local to a single call. Nothing persists between passes.
    let mut last_day = s!();
    let mut last_date = s!();

    for row in rows.iter_mut() {
        if row.date.trim().is_empty() {
            // Inherits. With no header-of-day seen yet this writes empty
            // strings: propagate the accumulator as-is, don't invent a date.
            row.day = last_day.clone();
            row.date = last_date.clone();
            row.derived = true;
        } else {
            // Header-of-day row: remember its values, leave its text alone.
            last_day = s!(row.day.trim());
            last_date = s!(row.date.trim());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(day: &str, date: &str) -> Row {
        Row::new(s!(day), s!(date), Vec::new())
    }

    #[test]
    fn propagates_last_seen_day_and_date() {
        let mut rows = vec![
            row("Mo", "01.01."),
            row("", ""),
            row("", " "),
            row("Di", "02.01."),
            row("", ""),
        ];
        normalize(&mut rows);

        assert_eq!(rows[1].day, "Mo");
        assert_eq!(rows[1].date, "01.01.");
        assert_eq!(rows[2].date, "01.01.");
        assert_eq!(rows[4].day, "Di");
        assert_eq!(rows[4].date, "02.01.");

        assert!(!rows[0].derived);
        assert!(rows[1].derived && rows[2].derived && rows[4].derived);
        assert!(!rows[3].derived);
    }

    #[test]
    fn leading_blank_rows_stay_empty() {
        let mut rows = vec![row("", ""), row("Mo", "01.01."), row("", "")];
        normalize(&mut rows);

        assert_eq!(rows[0].day, "");
        assert_eq!(rows[0].date, "");
        assert!(rows[0].derived);
        assert_eq!(rows[2].date, "01.01.");
    }

    #[test]
    fn accumulators_hold_trimmed_values_but_header_text_is_untouched() {
        let mut rows = vec![row(" Mo ", " 01.01. "), row("", "")];
        normalize(&mut rows);

        assert_eq!(rows[0].day, " Mo ");
        assert_eq!(rows[0].date, " 01.01. ");
        assert_eq!(rows[1].day, "Mo");
        assert_eq!(rows[1].date, "01.01.");
    }

    #[test]
    fn idempotent() {
        let mut rows = vec![row("", ""), row("Mo", "01.01."), row("", ""), row("Di", "02.01.")];
        normalize(&mut rows);
        let once = rows.clone();
        normalize(&mut rows);
        assert_eq!(rows, once);
    }

    #[test]
    fn empty_table_is_a_noop() {
        let mut rows: Vec<Row> = Vec::new();
        normalize(&mut rows);
        assert!(rows.is_empty());
    }
}
