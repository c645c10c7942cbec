use crate::constants::{
    CRATER_FEET_PER_MPH, FEET_PER_MILE, GOOD_LANDING_MPH, PERFECT_LANDING_MPH, SECONDS_PER_HOUR,
    SURVIVABLE_LANDING_MPH,
};
use crate::control::lander::LanderState;
use crate::control::stepper::PeriodOutcome;
use crate::trajectory_system::impact::Touchdown;
use crate::trajectory_system::kinematics::PhysicsState;

pub const INTRO_BANNER: &str = "\n              LUNAR\n\
CREATIVE COMPUTING MORRISTOWN, NJ\n\n\
THIS IS A COMPUTER SIMULATION OF AN\n\
APOLLO LUNAR LANDING CAPSULE.\n\n\
THE ON-BOARD COMPUTER HAS FAILED (IT WAS\n\
MADE BY XEROX) SO YOU HAVE TO LAND THE\n\
CAPSULE MANUALLY.\n";

pub const STATUS_HEADER: &str = " SEC  MILES  FEET    MPH   FUEL  RATE";

/// Briefing shown before each attempt.
pub fn instructions(max_burn_rate: f64, period_length: f64, lander: &LanderState) -> String {
    format!(
        "SET THE BURN RATE OF THE RETRO ROCKETS\n\
         TO ANY VALUE BETWEEN 0 (FREE FALL) AND\n\
         {max} (MAXIMUM BURN) IN POUNDS PER SECOND.\n\
         SET A NEW BURN RATE EVERY {period} SECONDS.\n\n\
         CAPSULE DRY WEIGHT IS {dry} LBS;\n\
         INITIAL FUEL IS {fuel} LBS.\n\n\n\
         GOOD LUCK!\n",
        max = max_burn_rate,
        period = period_length,
        dry = format_pounds(lander.capsule_mass),
        fuel = format_pounds(lander.fuel),
    )
}

// 16500.0 -> "16,500"
fn format_pounds(mass: f64) -> String {
    let digits = (mass.round() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// One line of the flight table, truncated to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRow {
    pub elapsed_seconds: u64,
    pub miles: i64,
    pub feet: i64,
    pub mph: i64,
    pub fuel: i64,
}

impl StatusRow {
    pub fn capture(physics: &PhysicsState, lander: &LanderState) -> Self {
        StatusRow {
            elapsed_seconds: physics.elapsed_time.trunc() as u64,
            miles: physics.altitude.trunc() as i64,
            feet: (FEET_PER_MILE * physics.altitude.fract()) as i64,
            mph: (SECONDS_PER_HOUR * physics.velocity) as i64,
            fuel: lander.fuel as i64,
        }
    }

    /// Row text without a trailing newline; the burn rate is typed after it.
    pub fn render(&self) -> String {
        format!(
            "{:4}    {:3}  {:4}  {:5}  {:5}  ",
            self.elapsed_seconds, self.miles, self.feet, self.mph, self.fuel
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LandingClass {
    Perfect,
    Good,
    CraftDamage,
    Crater { depth_feet: f64 },
}

impl LandingClass {
    pub fn classify(impact_mph: f64) -> Self {
        if impact_mph < PERFECT_LANDING_MPH {
            LandingClass::Perfect
        } else if impact_mph <= GOOD_LANDING_MPH {
            LandingClass::Good
        } else if impact_mph <= SURVIVABLE_LANDING_MPH {
            LandingClass::CraftDamage
        } else {
            LandingClass::Crater {
                depth_feet: impact_mph * CRATER_FEET_PER_MPH,
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            LandingClass::Perfect => "PERFECT LANDING!!".to_string(),
            LandingClass::Good => "GOOD LANDING (COULD BE BETTER)".to_string(),
            LandingClass::CraftDamage => "CRAFT DAMAGE... YOU'RE STRANDED HERE\n\
                 UNTIL A RESCUE PARTY ARRIVES.\n\
                 I HOPE YOU HAVE ENOUGH OXYGEN!"
                .to_string(),
            LandingClass::Crater { depth_feet } => format!(
                "THAT'S ONE SMALL IMPACT FOR THE MOON,\n\
                 ONE GIANT BOOM FOR YOUR LANDER!\n\
                 YOU BLASTED A NEW CRATER {} FEET DEEP!",
                *depth_feet as u64
            ),
        }
    }
}

/// End-of-attempt summary handed to the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingReport {
    pub fuel_out_time: Option<f64>,
    pub touchdown: Touchdown,
    pub impact_mph: f64,
    pub class: LandingClass,
}

impl LandingReport {
    pub fn new(fuel_out_time: Option<f64>, touchdown: Touchdown) -> Self {
        let impact_mph = touchdown.impact_velocity * SECONDS_PER_HOUR;
        LandingReport {
            fuel_out_time,
            touchdown,
            impact_mph,
            class: LandingClass::classify(impact_mph),
        }
    }

    pub fn from_outcome(outcome: &PeriodOutcome) -> Option<Self> {
        match outcome {
            PeriodOutcome::Continuing => None,
            PeriodOutcome::OutOfFuel {
                fuel_out_time,
                touchdown,
            } => Some(Self::new(Some(*fuel_out_time), *touchdown)),
            PeriodOutcome::Landed(touchdown) => Some(Self::new(None, *touchdown)),
        }
    }

    pub fn render(&self) -> String {
        let mut text = String::new();
        if let Some(fuel_out_time) = self.fuel_out_time {
            text.push_str(&format!("\nFUEL OUT AT {} SECONDS\n", fuel_out_time as u64));
        }
        text.push_str(&format!(
            "\nON THE MOON AT {} SECONDS\nIMPACT VELOCITY {} MPH\n\n{}\n",
            self.touchdown.elapsed_time as u64,
            self.impact_mph as i64,
            self.class.message()
        ));
        text
    }
}

/// Per-attempt flight log.
pub struct Telemetry {
    pub log: Vec<(StatusRow, f64)>,
    max_velocity: f64,
    min_altitude: f64,
    fuel_used: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_velocity: 0.0,
            min_altitude: f64::MAX,
            fuel_used: 0.0,
        }
    }

    /// Records the state a period started from and the burn rate chosen for it.
    pub fn record_period(&mut self, physics: &PhysicsState, lander: &LanderState, burn_rate: f64) {
        if physics.velocity > self.max_velocity {
            self.max_velocity = physics.velocity;
        }
        if physics.altitude < self.min_altitude {
            self.min_altitude = physics.altitude;
        }
        self.log.push((StatusRow::capture(physics, lander), burn_rate));
    }

    pub fn record_fuel_used(&mut self, initial_fuel: f64, lander: &LanderState) {
        self.fuel_used = initial_fuel - lander.fuel;
    }

    pub fn periods(&self) -> usize {
        self.log.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} periods flown, peak descent {:.0} mph, lowest recorded altitude {:.3} mi, fuel used {:.1} lbs",
            self.periods(),
            self.max_velocity * SECONDS_PER_HOUR,
            if self.log.is_empty() { 0.0 } else { self.min_altitude },
            self.fuel_used
        )
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
