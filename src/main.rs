use std::io;
use std::path::PathBuf;

use clap::Parser;
use lunar_simulation::*;

#[derive(Parser)]
#[command(author, version, about = "Apollo lunar landing simulation")]
struct Cli {
    /// TOML file overriding the lander defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the opening banner
    #[arg(long, default_value_t = false)]
    no_intro: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long, default_value_t = false)]
    dump_config: bool,

    /// Log flight detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => LanderConfig::from_file(path)?,
        None => LanderConfig::default(),
    };

    if cli.dump_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    exit_on_interrupt()?;

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config).with_intro(!cli.no_intro);
    match session.run() {
        Ok(reports) => {
            log::info!("Session over after {} landings", reports.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Simulation aborted: {}", e);
            Err(e.into())
        }
    }
}
