use atm::Result;

use std::{fs::File, path::Path};

use anyhow::Context;
use csv::{Reader, ReaderBuilder, Trim};

/// Opens a session script; header columns are checked when the script is played
pub fn build_script_reader(filepath: &Path) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_path(filepath)
        .with_context(|| format!("Couldn't open session script {}", filepath.display()))?;

    return Ok(reader);
}
