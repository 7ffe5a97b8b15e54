mod args;
mod config;
mod reader;

use atm::{script, Atm, Bank, ConsoleDisplay, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning session...");

    let mut bank = Bank::new();
    let mut display = ConsoleDisplay::new();

    let script_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {script_path:?}");

    let mut rdr = reader::build_script_reader(&script_path)?;

    let applied = {
        let mut atm = Atm::new(&mut bank, &mut display);
        script::play_script(&mut rdr, &mut atm)?
    };

    display.finish();

    log::debug!(
        "Session finished: {applied} commands applied across {} accounts",
        bank.len()
    );

    Ok(())
}
