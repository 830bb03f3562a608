// src/store.rs
//
// Local dataset cache: the raw (pre-normalization) roster goes to
// .store/dienstplan.csv after a fetch, and the GUI loads it at startup so
// the app opens populated while offline. Normalization re-runs after every
// load; filter state is never written anywhere.

use std::error::Error;
use std::{fs, io, path::PathBuf};

use crate::config::consts::{CACHE_FILE, STORE_DIR};
use crate::csv::{parse_rows, write_row};
use crate::roster::{Roster, Row};

fn cache_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(CACHE_FILE)
}

/// Persist the roster as delivered by the page (blank day/date cells and
/// all). Storing pre-normalization keeps the derived-cell marking intact
/// across a reload.
pub fn save_roster(roster: &Roster) -> io::Result<PathBuf> {
    let p = cache_path();

    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(&p)?;
    let mut writer = io::BufWriter::new(file);
    for row in &roster.rows {
        write_row(&mut writer, &row.to_cells(), ',')?;
    }

    Ok(p)
}

pub fn load_roster() -> Result<Roster, Box<dyn Error>> {
    let txt = fs::read_to_string(cache_path())?;
    let rows: Vec<Row> = parse_rows(&txt, ',')
        .into_iter()
        .map(Row::from_cells)
        .collect();
    Ok(Roster { rows })
}
