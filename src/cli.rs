use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "fantasy standings simulator backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the rankings API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Compute power rankings for one season and print the table
    Rankings {
        /// League identifier
        #[arg(short, long)]
        league_id: i64,
        /// Season identifier (year)
        #[arg(short, long)]
        season_id: i32,
    },
}
