//! Base directory served by the file read handler.

use std::fs;
use std::io;
use std::path::Path;

/// Name of the sample file written by [`seed`].
pub const WELCOME_FILE: &str = "welcome.txt";

/// Contents of the sample file.
pub const WELCOME_TEXT: &str = "Welcome to the file share.\n";

/// Join the base directory and the requested name as plain text.
///
/// No normalization happens: `..` segments and absolute names pass through.
pub fn resolve(base_dir: &str, filename: &str) -> String {
    format!("{}/{}", base_dir, filename)
}

/// Read the whole file at `path` as text.
pub fn read(path: &str) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Create the base directory and the sample file if missing.
pub fn seed(base_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(base_dir)?;
    let welcome = base_dir.join(WELCOME_FILE);
    if !welcome.exists() {
        fs::write(&welcome, WELCOME_TEXT)?;
        tracing::info!(path = %welcome.display(), "Seeded files directory");
    }
    Ok(())
}
