use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fuelrace_cli::terminal::ColorPalette;

mod commands;

use commands::catalog::CatalogArgs;
use commands::race::RaceArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fuel-limited vehicle race simulator")]
struct Cli {
    /// Disable ANSI colors (also honours NO_COLOR and TERM=dumb).
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a race between randomly assigned vehicles.
    Race(RaceArgs),
    /// List the makes and models vehicles are drawn from.
    Catalog(CatalogArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match cli.command {
        Command::Race(args) => commands::race::handle_race(&args, &palette),
        Command::Catalog(args) => commands::catalog::handle_list_catalog(&args, &palette),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
