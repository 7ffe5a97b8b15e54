use crate::input::{check_headers, InputEvent};
use crate::services::Atm;
use crate::Result;

use std::io::Read;

use csv::Reader;

/// Replays every script row against the ATM, returning how many rows were applied.
///
/// Rows that fail to deserialize or parse are logged and skipped; only an unreadable
/// header, or one missing a script column, aborts the replay.
pub fn play_script<R: Read>(reader: &mut Reader<R>, atm: &mut Atm) -> Result<usize> {
    let headers = reader.headers()?;
    log::debug!("Script headers: {headers:?}");
    check_headers(headers)?;

    let mut applied = 0;

    for record in reader.deserialize::<InputEvent>() {
        log::debug!("Parsing record into InputEvent: {record:?}");
        let input_event = match record {
            Ok(input_event) => input_event,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_event into SessionCommand: {input_event:?}");
        let command = match input_event.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Applying command: {command:?}");
        command.apply(atm);
        applied += 1;
    }

    Ok(applied)
}
