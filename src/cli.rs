// src/cli.rs
use crate::logf;
use std::{env, fs, path::PathBuf};

use crate::config::options::ExportFormat;
use crate::csv;
use crate::filter::{self, FilterState};
use crate::normalize;
use crate::roster;

pub struct Params {
    pub file: Option<PathBuf>,   // parse a saved page instead of fetching
    pub out: Option<PathBuf>,    // write here instead of stdout
    pub format: ExportFormat,
    pub include_headers: bool,
    pub filters: FilterState,
}

impl Params {
    pub fn new() -> Self {
        Self {
            file: None,
            out: None,
            format: ExportFormat::Csv,
            include_headers: false,
            filters: FilterState::default(),
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut roster = match &params.file {
        Some(p) => roster::parse_doc(&fs::read_to_string(p)?),
        None => roster::fetch()?,
    };

    // Normalize before filtering; the date filter reads propagated cells.
    normalize::normalize(&mut roster.rows);
    filter::apply(&mut roster.rows, &params.filters);

    let headers = Some(roster.headers_for_display());
    let width = headers.as_ref().map(|h| h.len()).unwrap_or(0);
    let cells = roster.cells(true, width);
    logf!("Cli: {} of {} row(s) pass", cells.len(), roster.rows.len());

    let txt = csv::to_export_string(&headers, &cells, params.include_headers, params.format.delim());

    match &params.out {
        Some(p) => {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(p, txt)?;
            eprintln!("Wrote {} row(s) to {}", cells.len(), p.display());
        }
        None => print!("{txt}"),
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-f" | "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                params.file = Some(PathBuf::from(v));}
            "--date" => params.filters.date = args.next().ok_or("Missing value for --date")?,
            "--name" => params.filters.names = args.next().ok_or("Missing value for --name")?,
            "--pos1" => params.filters.slots[0] = args.next().ok_or("Missing value for --pos1")?,
            "--pos2" => params.filters.slots[1] = args.next().ok_or("Missing value for --pos2")?,
            "--pos3" => params.filters.slots[2] = args.next().ok_or("Missing value for --pos3")?,
            "--pos4" => params.filters.slots[3] = args.next().ok_or("Missing value for --pos4")?,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => params.include_headers = true,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
