use crate::server;
use citynorm::cities::CityNormalizer;
use citynorm::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "City Name Normalizer",
    about = "Run the city-name normalization service or normalize names from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Normalize one or more names without starting the server
    Normalize(NormalizeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct NormalizeArgs {
    /// Names to normalize
    #[arg(required = true)]
    names: Vec<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Normalize(args) => run_normalize(args),
    }
}

// A name without a canonical mapping is data, not a failure; the process
// still exits 0.
fn run_normalize(args: NormalizeArgs) -> Result<(), AppError> {
    let normalizer = CityNormalizer::new();

    for name in &args.names {
        match normalizer.normalize(name) {
            Some(canonical) => println!("{name} -> {canonical}"),
            None => println!("{name} -> (no canonical match)"),
        }
    }

    Ok(())
}
