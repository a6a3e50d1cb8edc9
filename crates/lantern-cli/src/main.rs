mod commands;
mod host;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lantern_core::{RankOptions, Settings};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use host::Host;

#[derive(Parser)]
#[command(name = "lantern")]
#[command(about = "Lantern - switch windows, open bookmarks and launch images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Match window query characters in order, allowing gaps
    #[arg(long, global = true)]
    fuzzy: bool,

    /// Order windows by name instead of relevance
    #[arg(long, global = true)]
    alphabetical: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log plugin and ranking details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available plugins and their triggers
    Plugins,
    /// Run a launcher query, for example `lantern query win *fire`
    Query {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Run an action of one query result
    Activate {
        /// Identifier of the result item
        #[arg(long)]
        item: String,
        /// Action identifier, defaults to the item's first action
        #[arg(long)]
        action: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = init_tracing(cli.verbose) {
        eprintln!("Warning: logging disabled: {error}");
    }

    let json = cli.json;
    if let Err(error) = run(cli) {
        if json {
            println!("{}", serde_json::json!({ "error": format!("{error:#}") }));
        } else {
            eprintln!("Error: {error:#}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let rank = RankOptions {
        fuzzy: cli.fuzzy,
        order_by_relevancy: !cli.alphabetical,
    };
    let host = match Settings::from_env() {
        Ok(settings) => Host::new(&settings.with_rank_options(rank)),
        Err(error) => {
            warn!(%error, "bookmark and image plugins disabled");
            Host::windows_only(rank)
        }
    };

    match cli.command {
        Commands::Plugins => commands::plugins(&host, cli.json),
        Commands::Query { text } => commands::query(&host, &text.join(" "), cli.json),
        Commands::Activate { item, action, text } => {
            commands::activate(&host, &text.join(" "), &item, action.as_deref())
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if verbose {
        for directive in ["lantern=debug", "lantern_core=debug", "lantern_adapters=debug"] {
            filter = filter.add_directive(directive.parse()?);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
