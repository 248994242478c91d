use clap::{Parser, Subcommand};
use souq_cli::{commands, CliCurrency, CliProvider, CliSpecialty};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List property listings
    Properties {
        #[arg(long, value_enum, default_value = "syp")]
        currency: CliCurrency,
        #[arg(long)]
        max_price: Option<u64>,
        #[arg(long)]
        max_area: Option<u32>,
        #[arg(long, help = "Exact floor; 0 means basement")]
        floor: Option<u8>,
        #[arg(long, help = "Governorate key, e.g. 'damascus'")]
        governorate: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List doctors
    Doctors {
        #[arg(long, value_enum)]
        specialty: Option<CliSpecialty>,
        #[arg(long, help = "Governorate key, e.g. 'damascus'")]
        governorate: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List tourist sites
    Sites {
        #[arg(long, help = "Governorate key, e.g. 'damascus'")]
        governorate: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List hotels
    Hotels {
        #[arg(long)]
        json: bool,
    },
    /// List shipment offers
    Shipments {
        #[arg(long)]
        json: bool,
    },
    /// Show the example bank account
    Account {
        #[arg(long)]
        json: bool,
    },
    /// Simulate paying a government bill
    Pay {
        #[command(subcommand)]
        command: PayCommands,
    },
}

#[derive(Subcommand)]
enum PayCommands {
    /// Telecom bill: inquire by phone number, then confirm
    Telecom {
        #[arg(long, value_enum)]
        provider: CliProvider,
        number: String,
    },
    Electricity {
        invoice: String,
    },
    Water {
        invoice: String,
    },
    #[command(name = "traffic-fines")]
    TrafficFines {
        invoice: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.command {
        Commands::Properties {
            currency,
            max_price,
            max_area,
            floor,
            governorate,
            json,
        } => commands::cmd_properties(
            currency.into(),
            max_price,
            max_area,
            floor,
            governorate,
            json,
        )?,
        Commands::Doctors {
            specialty,
            governorate,
            json,
        } => commands::cmd_doctors(specialty.map(Into::into), governorate, json)?,
        Commands::Sites { governorate, json } => commands::cmd_sites(governorate, json)?,
        Commands::Hotels { json } => commands::cmd_hotels(json)?,
        Commands::Shipments { json } => commands::cmd_shipments(json)?,
        Commands::Account { json } => commands::cmd_account(json)?,
        Commands::Pay { command } => match command {
            PayCommands::Telecom { provider, number } => {
                commands::cmd_pay_telecom(provider.into(), number)?
            }
            PayCommands::Electricity { invoice } => {
                commands::cmd_pay_invoice("electricity", invoice)?
            }
            PayCommands::Water { invoice } => commands::cmd_pay_invoice("water", invoice)?,
            PayCommands::TrafficFines { invoice } => {
                commands::cmd_pay_invoice("traffic fines", invoice)?
            }
        },
    }

    Ok(())
}
