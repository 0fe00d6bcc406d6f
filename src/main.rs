//! CLI entry point for dirwalk

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirwalk::walk::DEFAULT_RECURSION_LIMIT;
use dirwalk::{
    NameWriter, SiblingOrder, Strategy, SymlinkPolicy, TreeWalker, WalkError, WalkSummary,
    WalkerConfig, logging,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "dirwalk")]
#[command(about = "Print the name of every file and directory under a path")]
#[command(version)]
struct Args {
    /// Directory or file to walk
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Traversal order: recursive, stack or queue
    #[arg(short, long, value_enum, default_value_t = Strategy::Recursive)]
    strategy: Strategy,

    /// Sort siblings by name instead of directory listing order
    #[arg(long)]
    sort: bool,

    /// Follow symlinked directories (each real directory is entered once)
    #[arg(short = 'L', long = "follow-links")]
    follow_links: bool,

    /// Call depth after which recursive walks continue on an explicit stack
    #[arg(long, value_name = "N", default_value_t = DEFAULT_RECURSION_LIMIT)]
    recursion_limit: usize,

    /// Print directory and file counts to stderr when done
    #[arg(long)]
    summary: bool,

    /// Increase diagnostic output (-v debug, -vv trace); DIRWALK_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            strategy: self.strategy,
            order: if self.sort {
                SiblingOrder::Name
            } else {
                SiblingOrder::Native
            },
            symlinks: if self.follow_links {
                SymlinkPolicy::Follow
            } else {
                SymlinkPolicy::Skip
            },
            recursion_limit: self.recursion_limit,
        }
    }
}

fn run(args: &Args) -> Result<WalkSummary, WalkError> {
    let walker = TreeWalker::new(args.walker_config());
    // Dropped before returning so buffered names reach stdout even on error
    let mut sink = NameWriter::new(BufWriter::new(io::stdout().lock()));
    walker.walk(&args.path, &mut sink)
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(args.verbose) {
        eprintln!("dirwalk: could not initialise logging: {}", e);
    }

    match run(&args) {
        Ok(summary) => {
            if args.summary {
                eprintln!("{} directories, {} files", summary.dirs, summary.files);
            }
        }
        Err(e) => {
            debug!(error = %e, "walk aborted");
            eprintln!("dirwalk: {}", e);
            process::exit(1);
        }
    }
}
