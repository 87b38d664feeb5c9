use beacon_gateway::Actions;
use beacon_runner::{BeaconProvider, ProviderConfig};

fn print_help() {
    eprintln!(
        r#"Beacon Provider - serves railway snapshots to in-process clients

USAGE:
    beacon-provider [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Run with an empty world
    beacon-provider

    # Run with seeded railway data
    beacon-provider --config provider.json
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            ProviderConfig::from_file(&path)?
        }
        None => ProviderConfig::default(),
    };

    let handle = BeaconProvider::new(config).start().await?;

    let ping = handle.request(Actions::PING, None).await?;
    log::info!("Self-check {}: {}", ping.status.as_str(), ping.payload);

    log::info!("Press Ctrl+C to stop");
    tokio::signal::ctrl_c().await?;

    handle.shutdown().await?;
    Ok(())
}
