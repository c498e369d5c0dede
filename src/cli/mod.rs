//! CLI definitions using clap.
//!
//! - checkout: compute and print a rental agreement, prompting for any
//!   missing value
//! - tools: list the catalog
//! - serve: run the HTTP API

pub mod prompt;

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use tool_rental::api::DEFAULT_MAX_RENTAL_DAYS;

/// Tool rental point of sale
#[derive(Parser, Debug)]
#[command(name = "tool-rental")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML catalog to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rent a tool and print the rental agreement
    Checkout {
        /// Tool code (e.g. LADW)
        tool_code: Option<String>,

        /// Number of rental days
        #[arg(allow_negative_numbers = true)]
        rental_days: Option<i64>,

        /// Discount percentage, 0 to 100
        #[arg(allow_negative_numbers = true)]
        discount_percentage: Option<i64>,

        /// Checkout date as MM/DD/YY
        checkout_date: Option<String>,
    },

    /// List the rentable tools
    Tools,

    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,

        /// Longest rental, in days, a request may ask for
        #[arg(long, default_value_t = DEFAULT_MAX_RENTAL_DAYS)]
        max_rental_days: u32,
    },
}
