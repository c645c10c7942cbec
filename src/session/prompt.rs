use std::io::{BufRead, Write};

use crate::errors::SimulationError;

/// Parses one line of player input into a burn rate within `[0, max_burn_rate]`.
pub fn parse_burn_rate(input: &str, max_burn_rate: f64) -> Result<f64, SimulationError> {
    let trimmed = input.trim();
    let rate: f64 = trimmed
        .parse()
        .map_err(|_| SimulationError::InvalidBurnRate(trimmed.to_string()))?;

    if (0.0..=max_burn_rate).contains(&rate) {
        Ok(rate)
    } else {
        Err(SimulationError::BurnRateOutOfRange {
            rate,
            max: max_burn_rate,
        })
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, SimulationError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Reads lines until one holds a valid burn rate. `None` means the input
/// closed before the player answered.
pub fn read_burn_rate<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max_burn_rate: f64,
) -> Result<Option<f64>, SimulationError> {
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match parse_burn_rate(&line, max_burn_rate) {
            Ok(rate) => return Ok(Some(rate)),
            Err(SimulationError::BurnRateOutOfRange { rate, max }) => {
                log::debug!("Rejected burn rate {rate}");
                write!(output, "PLEASE ENTER A BURN RATE\nBETWEEN 0 AND {max} : ")?;
            }
            Err(err) => {
                log::debug!("{err}");
                write!(output, "PLEASE ENTER A BURN RATE: ")?;
            }
        }
        output.flush()?;
    }
}

/// Asks whether to fly again; only answers starting with `y` count as yes.
pub fn ask_try_again<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<bool, SimulationError> {
    write!(output, "\nTRY AGAIN?? ")?;
    output.flush()?;
    let answer = read_line(input)?;
    Ok(answer.is_some_and(|reply| reply.trim_start().starts_with(['y', 'Y'])))
}
