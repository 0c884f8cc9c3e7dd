use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "landledger",
    about = "A property registry ledger with verification, listing and purchase",
    version,
    author,
    long_about = None
)]
pub struct LandledgerCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the ledger file (overrides the config file)
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new property
    Register {
        /// Identity of the registrant, who becomes the owner
        #[arg(short = 'C', long)]
        caller: String,

        /// Property name
        #[arg(short, long)]
        name: String,

        /// Property location
        #[arg(long)]
        location: String,

        /// Asking price in base units (wei)
        #[arg(short, long)]
        price: u128,

        /// Hash of the ownership document
        #[arg(short, long)]
        document_hash: String,
    },

    /// Approve or reject a property's documentation (government only)
    Verify {
        /// Identity of the government authority
        #[arg(short = 'C', long)]
        caller: String,

        /// Property id
        #[arg(short, long)]
        id: u64,

        /// Reject instead of approve
        #[arg(long, default_value = "false")]
        reject: bool,
    },

    /// List a property for sale (owner only)
    List {
        /// Identity of the owner
        #[arg(short = 'C', long)]
        caller: String,

        /// Property id
        #[arg(short, long)]
        id: u64,

        /// Asking price in base units (wei)
        #[arg(short, long)]
        price: u128,
    },

    /// Take a property off the market (owner only)
    Delist {
        /// Identity of the owner
        #[arg(short = 'C', long)]
        caller: String,

        /// Property id
        #[arg(short, long)]
        id: u64,
    },

    /// Buy a listed property with exact payment
    Buy {
        /// Identity of the buyer
        #[arg(short = 'C', long)]
        caller: String,

        /// Property id
        #[arg(short, long)]
        id: u64,

        /// Payment in base units (wei); must equal the asking price
        #[arg(short, long)]
        payment: u128,

        /// Skip the confirmation prompt
        #[arg(short, long, default_value = "false")]
        yes: bool,
    },

    /// Show one property record
    Show {
        /// Property id
        #[arg(short, long)]
        id: u64,
    },

    /// Show properties on the market, or all with --all
    Listings {
        /// Show every registered property, not only listed ones
        #[arg(long, default_value = "false")]
        all: bool,

        /// Only properties owned by this identity
        #[arg(short, long)]
        owner: Option<String>,

        /// Only properties awaiting verification
        #[arg(long, default_value = "false")]
        pending: bool,
    },

    /// Show the transaction log, optionally for one property
    History {
        /// Property id; omit for the full log
        #[arg(short, long)]
        id: Option<u64>,
    },
}
