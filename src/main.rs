use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing::{Level, info};
use unit_price::{
    EntryDraft, QuantityUnit, Settings,
    handlers::{compare::handle_compare, quote::handle_quote, session::run_session},
};

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(long, help = "(Optional) Sets the configuration file path.", global = true)]
    pub config: Option<String>,

    #[arg(long, help = "(Optional) Prints results as JSON.", global = true)]
    pub json: bool,

    #[arg(long, help = "(Optional) Enables debug logging.", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prints the price per kilogram and price tier of one product.
    Quote {
        #[arg(long, help = "Total price paid.", allow_hyphen_values = true)]
        price: String,

        #[arg(long, help = "Weight or volume of the package.", allow_hyphen_values = true)]
        quantity: String,

        #[arg(long, help = "Unit of the quantity: g, kg, ml or l.", default_value = "g")]
        unit: QuantityUnit,
    },

    /// Compares several products and shows which is cheapest per kilogram.
    Compare {
        #[arg(
            long = "item",
            help = "Adds a product as NAME;PRICE;QUANTITY;UNIT.",
            required = true
        )]
        items: Vec<String>,
    },

    /// Reads add/remove/clear/list/compare commands from stdin.
    Session,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = Settings::load(&args.config)?;
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Quote {
            price,
            quantity,
            unit,
        } => {
            let draft = EntryDraft::new("", price, quantity, unit);
            if !handle_quote(&draft, &settings, args.json, &mut stdout)? {
                stdout.flush()?;
                eprintln!("Price and quantity must be positive numbers.");
                std::process::exit(1);
            }
        }
        Command::Compare { items } => {
            let list = handle_compare(&items, &settings, args.json, &mut stdout)?;
            info!("compared {} of {} items", list.len(), items.len());
        }
        Command::Session => {
            let stdin = io::stdin().lock();
            run_session(stdin, &settings, args.json, &mut stdout)?;
        }
    }

    Ok(())
}
