use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;


pub use args::{OpenArgs, QueryArgs};

#[derive(Debug, Parser)]
#[command(name = "browser-bookmarks")]
#[command(about = "Search local browser bookmarks from a launcher", version)]
pub struct Cli {
    /// Home directory used to expand browser profile locations.
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Colon-separated extra directories to scan for `Bookmarks` files.
    #[arg(long, global = true, value_name = "DIRS")]
    pub extra_paths: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Answer launcher host events read line by line from stdin.
    Serve,
    Query(QueryArgs),
    Sources,
    Open(OpenArgs),
}
