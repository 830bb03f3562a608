// src/config/consts.rs

// Net config
pub const HOST: &str = "old.samariter.at";
pub const PAGE_PATH: &str = "/dienstplan.php";

// Roster markup shape: data rows are <tr class="dienstidNNN">,
// name cells are <td class="dpl_pos">.
pub const ROW_CLASS_PREFIX: &str = "dienstid";
pub const NAME_CELL_CLASS: &str = "dpl_pos";

// Positional filter slots: Lenker, Teamleiter, Dritter, Vierter.
// Rows may carry more name cells; extras are only reachable via the
// combined name filter.
pub const NAME_SLOTS: usize = 4;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const CACHE_FILE: &str = "dienstplan.csv";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "dienstplan";
