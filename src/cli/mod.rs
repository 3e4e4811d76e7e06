//! CLI module - Command-line interface for Filmarr
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

pub use commands::{cmd_list_movies, cmd_seed_director, cmd_seed_genre};

/// Filmarr - Movie Catalog Service
/// A small CRUD service for movies, directors and genres
#[derive(Parser)]
#[command(name = "filmarr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    #[command(alias = "daemon")]
    Serve,

    /// Create default config file
    Init,

    /// Insert reference rows (the service exposes no endpoint for these)
    Seed {
        #[command(subcommand)]
        command: SeedCommands,
    },

    /// List stored movies
    #[command(alias = "ls")]
    Movies,
}

#[derive(Subcommand)]
pub enum SeedCommands {
    /// Add a director
    Director {
        /// Director name
        name: String,
    },

    /// Add a genre
    Genre {
        /// Genre name
        name: String,
    },
}
