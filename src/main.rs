use clap::{Parser, Subcommand, builder::styling};
use eyre::Result;
use owo_colors::OwoColorize;
use transit_card_balance::cli::{
    GENERIC_FAILURE, load_balance_pipeline, lookup_card, parse_page_file, render_record,
};

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Card Balance: look up a transit card's balance from the card portal
#[derive(Parser)]
#[command(name = "cardbal", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source portal settings from
    #[arg(short, long, global = true, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the balance page for a card and print its details as JSON
    Lookup {
        /// Card number, passed to the portal as-is
        card_number: String,

        /// Print JSON on a single line
        #[arg(short, long)]
        compact: bool,
    },

    /// Read card details from a saved balance page without contacting the portal
    Parse {
        /// HTML file saved from the balance page
        file: String,

        /// Print JSON on a single line
        #[arg(short, long)]
        compact: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let dotenv = dotenvy::from_filename(&cli.env);

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    if let Err(e) = dotenv {
        log::debug!("Not sourcing {}: {}", cli.env.bright_black(), e);
    }

    match cli.command {
        Commands::Lookup {
            card_number,
            compact,
        } => {
            let pipeline = load_balance_pipeline()?;
            log::debug!(
                "Using balance endpoint {}",
                pipeline.fetcher().client().endpoint().bright_black()
            );

            match lookup_card(&pipeline, &card_number, compact).await {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    log::debug!("Lookup failed: {:?}", e);
                    eprintln!("{}", GENERIC_FAILURE.red());
                    std::process::exit(1);
                }
            }
        }
        Commands::Parse { file, compact } => {
            let record = parse_page_file(&file)?;
            println!("{}", render_record(&record, compact)?);
        }
    }

    Ok(())
}
