use std::io::Write;
use std::process::exit;

use clap::Parser;
use log::{error, info, LevelFilter};

use transflow::transport::mocks::{mock_tech_hardware_modified_network, mock_tech_hardware_network};
use transflow::transport::{solve_config, NetworkConfig, TransportError};

/// Minimum cost flow through a supply -> transshipment -> demand network.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// JSON file containing the network description. The TechHardware network is used without it.
    problem_file: Option<String>,
    /// Use the modified TechHardware network (demand +25%, I3 capacity override)
    #[arg(long, conflicts_with = "problem_file")]
    modified: bool,
}

fn load(opts: &Opts) -> Result<NetworkConfig, TransportError> {
    match &opts.problem_file {
        Some(path) => {
            info!("reading network file: \"{}\"", path);
            Ok(NetworkConfig::from_file(path)?)
        }
        None if opts.modified => Ok(mock_tech_hardware_modified_network()),
        None => Ok(mock_tech_hardware_network()),
    }
}

fn main() {
    env_logger::builder()
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] - {}",
                record.level(),
                record.file().unwrap_or(""),
                record.line().map(|l| l.to_string()).unwrap_or_default(),
                record.args()
            )
        })
        .init();
    let opts = Opts::parse();

    let outcome = load(&opts).and_then(|config| solve_config(&config));
    match outcome {
        Ok(outcome) => {
            print!("{}", outcome);
            if !outcome.is_optimal() {
                exit(1);
            }
        }
        Err(e) => {
            error!("{}", e);
            exit(2);
        }
    }
}
