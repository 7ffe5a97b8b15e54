use atm::input::SCRIPT_COLUMNS;
use atm::Result;

use std::{
    env,
    fs,
    path::PathBuf,
};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}\n{}", usage())]
    Parse(String),

    #[error("Script file not found: {0}")]
    FileNotFound(String),
}

fn usage() -> String {
    format!(
        "Usage: toy-atm <script.csv>\n\
         \n\
         The script is a CSV file with the header `{}`, one command per row:\n\
         \x20 open          opens an account, `password` becomes its password\n\
         \x20 view          authenticates `account` with `password`\n\
         \x20 balance       shows the active account's balance\n\
         \x20 deposit       deposits `amount`\n\
         \x20 withdraw      withdraws `amount`\n\
         \x20 transactions  lists the active account's history\n\
         Lines starting with `#` are ignored.",
        SCRIPT_COLUMNS.join(",")
    )
}

/// Parses the input arguments, requiring exactly one argument: the session script
pub fn parse_input_arg() -> Result<PathBuf> {
    let mut args = env::args().skip(1);

    let filename = args.next()
        .ok_or_else(|| InputArgsError::Parse("First argument must be the session script.".to_string()))?;

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument: {extra}")))?
    }

    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(path)
}
