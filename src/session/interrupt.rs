use std::io::Write;
use std::process;

use crate::errors::SimulationError;

pub const EXIT_MESSAGE: &str = "\nEXITING GAME";

/// Makes Ctrl-C end the game politely with a zero exit status.
///
/// Only one handler can exist per process; a second call fails with
/// [`SimulationError::SignalHandler`].
pub fn exit_on_interrupt() -> Result<(), SimulationError> {
    ctrlc::set_handler(|| {
        log::info!("Interrupted, leaving the game");
        let mut stdout = std::io::stdout();
        let _ = writeln!(stdout, "{EXIT_MESSAGE}");
        let _ = stdout.flush();
        process::exit(0);
    })?;
    Ok(())
}
