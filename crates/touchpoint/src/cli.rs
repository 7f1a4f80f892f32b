use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "touchpoint")]
#[command(version)]
#[command(about = "UTM attribution capture for ticket purchase links")]
pub struct Cli {
    /// Store file to use instead of the default location
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a page visit, capturing any UTM parameters on its URL
    Visit {
        /// Full visit URL including the query string
        url: String,
    },

    /// Print the attribution relevant to a page path
    Resolve {
        /// Page path, e.g. /events/summer-fest
        path: String,

        /// Print as an URL-encoded query string instead of JSON
        #[arg(long)]
        query: bool,
    },

    /// Merge resolved attribution into one or more outbound URLs
    Decorate {
        /// Page path the links appear on
        path: String,

        /// Target URLs to decorate
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Dump the persisted store state
    Show,

    /// Print version information
    Version,
}
