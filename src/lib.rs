//! Meme: resolve an image reference into bytes.
//!
//! An image reference is whatever the user typed to pick a picture: the id
//! of an image bundled with the program, an `http(s)` URL, `-` for standard
//! input, or a path on disk (with `~` expansion). Resolution classifies the
//! reference once and then fetches it into a fully buffered [`ByteStream`]
//! that later stages (rendering, upload or saving) consume.
//!
//! # Modules
//!
//! - [`catalog`]: Read-only access to the images compiled into the binary
//! - [`registry`]: Asset ids for the bundled images
//! - [`source`]: Classification and fetching of image references
//! - [`stream`]: The buffered byte stream passed between stages
//! - [`pipeline`]: Seams for the rendering and delivery stages
//! - [`error`]: Error types for meme operations

pub mod catalog;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod source;
pub mod stream;

use std::borrow::Cow;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;

use catalog::{Catalog, EmbeddedCatalog, DECAL_DIR};
use pipeline::{FileSink, PassThrough, Render, Sink};
use registry::AssetRegistry;
use source::Resolver;

pub use config::ResolverConfig;
pub use error::{ErrorClass, MemeError};
pub use stream::ByteStream;

/// The meme CLI application.
#[derive(Parser)]
#[command(name = "meme")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Give up on a download after this many seconds.
    #[arg(long, env = "MEME_HTTP_TIMEOUT", default_value_t = config::DEFAULT_HTTP_TIMEOUT.as_secs(), global = true)]
    timeout: u64,

    /// Refuse images larger than this many bytes.
    #[arg(long, env = "MEME_MAX_BYTES", default_value_t = config::DEFAULT_MAX_BYTES, global = true)]
    max_bytes: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Load an image and save it to a file.
    Resolve(ResolveArgs),
    /// Show where an image reference points without loading it.
    Classify(ClassifyArgs),
    /// List the bundled image ids.
    List(ListArgs),
    /// Save a bundled decal to a file.
    Decal(DecalArgs),
}

/// Arguments for the resolve subcommand.
#[derive(clap::Args)]
struct ResolveArgs {
    /// Bundled image id, URL, local path, or '-' for stdin.
    image: String,

    /// Where to write the image.
    #[arg(short = 'o', long = "out", default_value = "meme.png")]
    out: PathBuf,
}

/// Arguments for the classify subcommand.
#[derive(clap::Args)]
struct ClassifyArgs {
    /// Bundled image id, URL, local path, or '-' for stdin.
    image: String,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the list subcommand.
#[derive(clap::Args)]
struct ListArgs {
    /// List decal paths instead of image ids.
    #[arg(long)]
    decals: bool,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the decal subcommand.
#[derive(clap::Args)]
struct DecalArgs {
    /// Catalog path of the decal, e.g. 'decals/watermark.png'.
    name: String,

    /// Where to write the decal.
    #[arg(short = 'o', long = "out")]
    out: PathBuf,
}

#[derive(Serialize)]
struct ClassifyReport<'a> {
    reference: &'a str,
    kind: &'static str,
    key: Option<Cow<'a, str>>,
}

#[derive(Serialize)]
struct ListedEntry<'a> {
    id: &'a str,
    path: &'a str,
}

/// Run the meme CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), MemeError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ResolverConfig::default()
        .with_http_timeout(Duration::from_secs(cli.timeout))
        .with_max_bytes(cli.max_bytes);

    let Some(command) = cli.command else {
        println!("meme {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Resolve meme images from bundled assets, URLs, files or stdin.");
        println!();
        println!("Run 'meme --help' for usage information.");
        return Ok(());
    };

    // The registry must exist before any reference is looked at.
    let catalog = EmbeddedCatalog::bundled();
    let registry = AssetRegistry::build(&catalog)?;
    let resolver = Resolver::new(&catalog, &registry, config);

    match command {
        Commands::Resolve(args) => run_resolve(&resolver, args),
        Commands::Classify(args) => run_classify(&resolver, args),
        Commands::List(args) => run_list(&catalog, &registry, args),
        Commands::Decal(args) => run_decal(&resolver, args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Execute the resolve subcommand.
fn run_resolve(resolver: &Resolver<'_>, args: ResolveArgs) -> Result<(), MemeError> {
    let stream = resolver.resolve(&args.image)?;
    let stream = PassThrough.render(stream)?;
    let location = FileSink::new(args.out).deliver(stream)?;
    println!("{}", location);
    Ok(())
}

/// Execute the classify subcommand.
fn run_classify(resolver: &Resolver<'_>, args: ClassifyArgs) -> Result<(), MemeError> {
    let kind = resolver.classify(&args.image)?;

    match args.output.as_str() {
        "json" => {
            let report = ClassifyReport {
                reference: &args.image,
                kind: kind.name(),
                key: kind.key(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => println!("{}", kind),
        other => return Err(unsupported_output(other)),
    }
    Ok(())
}

/// Execute the list subcommand.
fn run_list(
    catalog: &dyn Catalog,
    registry: &AssetRegistry,
    args: ListArgs,
) -> Result<(), MemeError> {
    let decal_entries;
    let entries: Vec<ListedEntry<'_>> = if args.decals {
        decal_entries = catalog
            .list_entries(DECAL_DIR)
            .map_err(|source| MemeError::InternalRead {
                what: "decal",
                path: DECAL_DIR.to_string(),
                message: source.to_string(),
            })?;
        decal_entries
            .iter()
            .map(|entry| ListedEntry {
                id: &entry.path,
                path: &entry.path,
            })
            .collect()
    } else {
        registry
            .iter()
            .map(|(id, path)| ListedEntry { id, path })
            .collect()
    };

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&entries)?),
        "text" => {
            for entry in &entries {
                println!("{}", entry.id);
            }
        }
        other => return Err(unsupported_output(other)),
    }
    Ok(())
}

/// Execute the decal subcommand.
fn run_decal(resolver: &Resolver<'_>, args: DecalArgs) -> Result<(), MemeError> {
    let stream = resolver.fetch_decal(&args.name)?;
    let location = FileSink::new(args.out).deliver(stream)?;
    println!("{}", location);
    Ok(())
}

fn unsupported_output(other: &str) -> MemeError {
    MemeError::UnsupportedOutput(format!("'{}' (supported: text, json)", other))
}
