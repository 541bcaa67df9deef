// src/constants.rs
//
// Application-wide defaults. Each constant is documented with where it is used.

/// Notes collection endpoint used when neither config nor flags name one.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/notes";

/// Rows per page before the user changes it.
///
/// Used in: `infrastructure/config.rs`, `application/view.rs`
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Directory below the platform config dir holding the config file.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "notesview";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Column widths of the terminal table, in characters.
///
/// Used in: `ports/table.rs`
pub const TITLE_COLUMN_WIDTH: usize = 24;
pub const CONTENT_COLUMN_WIDTH: usize = 40;

/// Delay in milliseconds after writing the HTML page before the temp dir may go away.
///
/// The browser is spawned asynchronously and needs a moment to read the file
/// before the temporary directory is removed on exit.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
