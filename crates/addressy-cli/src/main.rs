use addressy_client::{ApiVersion, LookupClient, LookupQuery};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "addressy-cli")]
#[command(about = "Capture Interactive address lookup")]
struct Cli {
    /// API key for the Capture Interactive service.
    #[arg(long, env = "ADDRESSY_API_KEY", hide_env_values = true)]
    key: String,

    /// Use the legacy v1.00 Postcode Anywhere endpoint.
    #[arg(long)]
    legacy: bool,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find addresses matching free text, resolving containers fully.
    Find {
        /// Search text, typically a postcode or the start of an address.
        text: String,
        /// Restrict to countries, e.g. "GB" or "GB|US".
        #[arg(long)]
        countries: Option<String>,
        /// Origin hint (user IP or ISO country code).
        #[arg(long)]
        origin: Option<String>,
        /// Maximum number of results.
        #[arg(long)]
        limit: Option<u32>,
        /// Result language, e.g. "en" or "en-gb".
        #[arg(long)]
        language: Option<String>,
    },
    /// Retrieve the fully detailed record for a final entry id.
    Retrieve {
        /// Entry id from a find result.
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let version = if cli.legacy {
        ApiVersion::Legacy
    } else {
        ApiVersion::Current
    };
    let client = LookupClient::new(&cli.key, version, cli.timeout)?;

    match cli.command {
        Commands::Find {
            text,
            countries,
            origin,
            limit,
            language,
        } => {
            let mut query = LookupQuery::new(text);
            if let Some(countries) = countries {
                query = query.countries(countries);
            }
            if let Some(origin) = origin {
                query = query.origin(origin);
            }
            if let Some(limit) = limit {
                query = query.limit(limit);
            }
            if let Some(language) = language {
                query = query.language(language);
            }

            let entries = client.lookup(&query).await?;
            tracing::info!(count = entries.len(), "lookup complete");
            for entry in entries {
                println!("{}\t{}", entry.id, entry.text);
            }
        }
        Commands::Retrieve { id } => {
            let address = client.retrieve(&id).await?;
            println!("{}", serde_json::to_string_pretty(&address)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
