//! CLI entry point for ncache

use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::{Builder, Env};
use log::{debug, error, info};
use ncache::tree::DEFAULT_MAX_DEPTH;
use ncache::{CacheDocument, DirectoryNode, Indexer, IndexerConfig, OutputConfig, write_json};

#[derive(Parser, Debug)]
#[command(name = "ncache")]
#[command(about = "JSON cache generator for EasyRPG Player ports")]
#[command(version)]
#[command(
    after_help = "It uses the current directory if not given as argument.\nWithout --output the cache is written to stdout."
)]
struct Args {
    /// Directory to index
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file ("-" for stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty print the JSON contents
    #[arg(short = 'p', long = "pretty")]
    pretty: bool,

    /// Recursion depth
    #[arg(
        short = 'r',
        long = "recurse",
        value_name = "DEPTH",
        default_value_t = DEFAULT_MAX_DEPTH as i64,
        allow_negative_numbers = true
    )]
    recurse: i64,

    /// Explain what is being done
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let env = Env::new()
        .filter_or("NCACHE_LOG", default_level)
        .write_style("NCACHE_LOG_STYLE");
    Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let config = IndexerConfig::from_depth(args.recurse).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    info!("Scanning filesystem");
    let indexer = Indexer::new(config, log::logger());
    let cache = indexer.build(&args.path).unwrap_or_else(|e| {
        error!("{}", e);
        DirectoryNode::default()
    });
    debug!("Indexed {} files", cache.file_count());

    let document = CacheDocument::new(cache);
    let output = OutputConfig::from_arg(args.output, args.pretty);
    if output.pretty {
        debug!("Enabling pretty print");
    }

    info!("Writing JSON");
    if let Err(e) = write_json(&document, &output) {
        error!("{}", e);
        process::exit(1);
    }

    if let Some(path) = &output.destination {
        println!(
            "Directory cache has been written to \"{}\".",
            path.display()
        );
    }
}
