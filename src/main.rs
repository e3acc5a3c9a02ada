use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser, Debug)]
#[command(name = "yieldc", version, about = "Rental property investment calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate and display every metric of an investment scenario
    Report(cmd::report::ReportCommand),
    /// Repayment figures for a single loan
    Mortgage(cmd::mortgage::MortgageCommand),
    /// Print the scenario input format
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Report(report) => report.exec(),
        Command::Mortgage(mortgage) => mortgage.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}

/// Warnings are shown by default; `RUST_LOG` overrides the filter.
fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log::LevelFilter::Warn);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
