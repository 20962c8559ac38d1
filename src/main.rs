use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use spotcat::{cli, config, spotify::DEFAULT_API_VERSION, types::ResourceKind, utils, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Print debug diagnostics to stderr (overrides RUST_LOG)
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up an album by id
    Album(IdOptions),

    /// Look up an artist by id
    Artist(IdOptions),

    /// Look up a track by id
    Track(IdOptions),

    /// Look up any catalog resource by id
    Lookup(LookupOptions),

    /// Search the catalog
    Search(SearchOptions),

    /// Authenticate and show token expiry
    Token,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct IdOptions {
    /// Spotify id of the resource
    pub id: String,

    /// Print the raw JSON response
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct LookupOptions {
    /// Spotify id of the resource
    pub id: String,

    /// Resource collection (albums, artists, tracks)
    #[clap(long, default_value = "albums")]
    pub kind: ResourceKind,

    /// API version path segment
    #[clap(long = "api-version", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Print the raw JSON response
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text query, used as-is
    #[clap(conflicts_with = "fields")]
    pub query: Option<String>,

    /// Field filter as key=value; can be repeated, order is kept
    #[clap(long = "field", value_parser = utils::parse_field, num_args = 1)]
    pub fields: Vec<(String, String)>,

    /// Boolean operator to append (OR or NOT); anything else is ignored
    #[clap(long, requires = "clause")]
    pub operator: Option<String>,

    /// Text appended after the operator
    #[clap(long)]
    pub clause: Option<String>,

    /// Result type(s), e.g. artist, album, track or "album,track"
    #[clap(long = "type", default_value = "artist")]
    pub search_type: String,

    /// Print the raw JSON response
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("spotcat=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    match cli.command {
        Command::Album(opt) => {
            cli::lookup(opt.id, ResourceKind::Albums, DEFAULT_API_VERSION.into(), opt.json).await
        }
        Command::Artist(opt) => {
            cli::lookup(opt.id, ResourceKind::Artists, DEFAULT_API_VERSION.into(), opt.json).await
        }
        Command::Track(opt) => {
            cli::lookup(opt.id, ResourceKind::Tracks, DEFAULT_API_VERSION.into(), opt.json).await
        }
        Command::Lookup(opt) => cli::lookup(opt.id, opt.kind, opt.api_version, opt.json).await,
        Command::Search(opt) => {
            cli::search(
                opt.query,
                opt.fields,
                opt.operator,
                opt.clause,
                opt.search_type,
                opt.json,
            )
            .await
        }
        Command::Token => cli::token().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
