use std::io::Cursor;

use approx::assert_abs_diff_eq;
use lunar_simulation::{
    new_attempt, run_period, LanderConfig, LandingClass, LandingReport, PeriodOutcome,
    Session, SimulationStepper, GRAVITY, INITIAL_ALTITUDE, INITIAL_FUEL, INITIAL_VELOCITY,
    PERIOD_LENGTH,
};

// Flies the default attempt with one burn rate per period until it ends.
fn fly(rates: impl IntoIterator<Item = f64>) -> (SimulationStepper, PeriodOutcome) {
    let mut stepper = SimulationStepper::new(&LanderConfig::default())
        .expect("Default configuration should be valid");

    for burn_rate in rates {
        let outcome = stepper
            .run_period(burn_rate)
            .expect("Period should integrate without errors");

        println!(
            "t={:.1}s | Alt: {:.4}mi | Vel: {:.5}mi/s | Fuel: {:.1}lbs | Rate: {:.1}",
            stepper.physics.elapsed_time,
            stepper.physics.altitude,
            stepper.physics.velocity,
            stepper.lander.fuel,
            burn_rate
        );

        assert_eq!(
            stepper.lander.total_mass,
            stepper.lander.capsule_mass + stepper.lander.fuel,
            "Total mass must track fuel after every period"
        );

        if outcome.is_terminal() {
            return (stepper, outcome);
        }
    }
    panic!("Attempt did not end within the scheduled periods");
}

#[test]
fn test_free_fall_landing() {
    println!("INTEGRATION TEST: Free Fall From Default Start");

    let (stepper, outcome) = fly(std::iter::repeat(0.0).take(20));

    let touchdown = match outcome {
        PeriodOutcome::Landed(touchdown) => touchdown,
        other => panic!("Free fall should end in Landed, got {:?}", other),
    };

    let expected_velocity =
        (INITIAL_VELOCITY.powi(2) + 2.0 * GRAVITY * INITIAL_ALTITUDE).sqrt();
    let expected_time = (expected_velocity - INITIAL_VELOCITY) / GRAVITY;

    assert_abs_diff_eq!(touchdown.impact_velocity, expected_velocity, epsilon = 1e-6);
    assert_abs_diff_eq!(touchdown.elapsed_time, expected_time, epsilon = 0.005);
    assert_eq!(stepper.physics.altitude, 0.0);
    assert_eq!(stepper.lander.fuel, INITIAL_FUEL);

    let report = LandingReport::from_outcome(&outcome).unwrap();
    match report.class {
        LandingClass::Crater { depth_feet } => assert_eq!(depth_feet as u64, 909),
        other => panic!("A 4000 mph impact should leave a crater, got {:?}", other),
    }
}

#[test]
fn test_full_burn_runs_dry() {
    println!("INTEGRATION TEST: Sustained Maximum Burn");

    let (stepper, outcome) = fly(std::iter::repeat(200.0).take(20));

    match outcome {
        PeriodOutcome::OutOfFuel {
            fuel_out_time,
            touchdown,
        } => {
            assert_abs_diff_eq!(fuel_out_time, INITIAL_FUEL / 200.0, epsilon = 1e-6);
            assert!(touchdown.elapsed_time > fuel_out_time);
            assert!(touchdown.impact_velocity > 0.0);
        }
        other => panic!("Sustained burn should exhaust the fuel, got {:?}", other),
    }
    assert_eq!(stepper.lander.fuel, 0.0);
    assert!(stepper.is_landed());
}

#[test]
fn test_guided_descent_lands_gently() {
    println!("INTEGRATION TEST: Guided Descent");

    let schedule = [
        127.0, 87.0, 84.5, 82.0, 80.0, 78.0, 75.5, 74.0, 71.5, 69.5, 67.5, 66.0, 64.0, 62.5,
        60.5, 59.0, 57.0, 56.0, 54.0, 53.0, 51.0, 50.0, 49.0, 47.0, 44.5,
    ];
    let (stepper, outcome) = fly(schedule);

    let touchdown = match outcome {
        PeriodOutcome::Landed(touchdown) => touchdown,
        other => panic!("Guided descent should touch down under power, got {:?}", other),
    };
    println!(
        "Touchdown at {:.2}s, {:.2} mph",
        touchdown.elapsed_time,
        touchdown.impact_velocity * 3600.0
    );

    assert!(touchdown.elapsed_time > 240.0 && touchdown.elapsed_time < 250.0);
    assert!(stepper.lander.fuel > 0.0);
    let report = LandingReport::from_outcome(&outcome).unwrap();
    assert_eq!(report.class, LandingClass::Good);
}

#[test]
fn test_zero_fuel_attempt() {
    let config = LanderConfig {
        fuel: 0.0,
        ..LanderConfig::default()
    };
    let (mut physics, mut lander) = new_attempt(&config).unwrap();
    let outcome = run_period(&mut physics, &mut lander, 120.0, PERIOD_LENGTH).unwrap();

    assert!(matches!(
        outcome,
        PeriodOutcome::OutOfFuel { fuel_out_time, .. } if fuel_out_time == 0.0
    ));
}

#[test]
fn test_fresh_attempts_are_independent() {
    let (first, _) = fly(std::iter::repeat(200.0).take(20));
    let (second, _) = fly(std::iter::repeat(200.0).take(20));
    assert_eq!(first.physics, second.physics);
    assert_eq!(first.lander, second.lander);
}

#[test]
fn test_scripted_session() {
    println!("INTEGRATION TEST: Scripted Session");

    let script = "200\n".repeat(9) + "yes\n" + &"0\n".repeat(12) + "n\n";
    let mut session = Session::new(Cursor::new(script), Vec::new(), LanderConfig::default());
    let reports = session.run().expect("Session should complete");
    let output = String::from_utf8(session.into_output()).unwrap();

    assert_eq!(reports.len(), 2);
    let fuel_out_time = reports[0]
        .fuel_out_time
        .expect("Full burn should run the tanks dry");
    assert_abs_diff_eq!(fuel_out_time, 82.5, epsilon = 1e-6);
    assert_eq!(reports[1].fuel_out_time, None);
    assert!(output.contains("CREATIVE COMPUTING MORRISTOWN, NJ"));
    assert!(output.contains("FUEL OUT AT 82 SECONDS"));
    assert!(output.contains("ON THE MOON AT 113 SECONDS"));
    assert_eq!(output.matches("TRY AGAIN?? ").count(), 2);
}
