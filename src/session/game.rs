use std::io::{BufRead, Write};

use crate::control::config::LanderConfig;
use crate::control::stepper::{PeriodOutcome, SimulationStepper};
use crate::errors::SimulationError;
use crate::session::prompt::{ask_try_again, read_burn_rate};
use crate::telemetry_system::telemetry::{
    instructions, LandingReport, StatusRow, Telemetry, INTRO_BANNER, STATUS_HEADER,
};

/// Interactive play over any line-oriented input and text output.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: LanderConfig,
    show_intro: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: LanderConfig) -> Self {
        Session {
            input,
            output,
            config,
            show_intro: true,
        }
    }

    pub fn with_intro(mut self, show_intro: bool) -> Self {
        self.show_intro = show_intro;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays attempts until the player declines another or input runs out.
    /// Returns the report of every attempt that reached the surface.
    pub fn run(&mut self) -> Result<Vec<LandingReport>, SimulationError> {
        if self.show_intro {
            writeln!(self.output, "{INTRO_BANNER}")?;
        }

        let mut reports = Vec::new();
        loop {
            match self.run_attempt()? {
                Some(report) => reports.push(report),
                None => {
                    log::info!("Input closed, ending session");
                    break;
                }
            }
            if !ask_try_again(&mut self.input, &mut self.output)? {
                break;
            }
        }
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(reports)
    }

    fn run_attempt(&mut self) -> Result<Option<LandingReport>, SimulationError> {
        let mut stepper = SimulationStepper::new(&self.config)?;
        let mut telemetry = Telemetry::new();
        let initial_fuel = stepper.lander.fuel;

        writeln!(
            self.output,
            "{}",
            instructions(stepper.max_burn_rate, stepper.period_length, &stepper.lander)
        )?;
        writeln!(self.output, "{STATUS_HEADER}")?;

        loop {
            let (physics, lander) = (stepper.physics, stepper.lander.clone());
            write!(self.output, "{}", StatusRow::capture(&physics, &lander).render())?;
            self.output.flush()?;

            let Some(burn_rate) =
                read_burn_rate(&mut self.input, &mut self.output, stepper.max_burn_rate)?
            else {
                return Ok(None);
            };
            telemetry.record_period(&physics, &lander, burn_rate);

            let report = match stepper.run_period(burn_rate)? {
                PeriodOutcome::Continuing => continue,
                PeriodOutcome::OutOfFuel {
                    fuel_out_time,
                    touchdown,
                } => LandingReport::new(Some(fuel_out_time), touchdown),
                PeriodOutcome::Landed(touchdown) => LandingReport::new(None, touchdown),
            };

            telemetry.record_fuel_used(initial_fuel, &stepper.lander);
            log::info!("{}", telemetry.summary());
            write!(self.output, "{}", report.render())?;
            return Ok(Some(report));
        }
    }
}
