use std::path::PathBuf;

use beepy_observability::LogFormat;
use clap::{Parser, Subcommand};

/// beepy - command-line access to the Beepy referral console
#[derive(Parser, Debug)]
#[command(name = "beepy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// API root (overrides BEEPY_API_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds (overrides BEEPY_API_TIMEOUT_MS)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Session file (overrides BEEPY_SESSION_FILE)
    #[arg(long)]
    pub session_file: Option<PathBuf>,

    /// Log output format (json, pretty)
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in as it
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        /// admin or ambassador
        #[arg(long)]
        role: String,
        #[arg(long)]
        password: String,
    },

    /// Drop the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Ask the backend whether the stored session is still valid
    Verify,

    /// List the screens and actions available to the signed-in user
    Menu,

    /// Validate a single value locally
    #[command(subcommand)]
    Check(CheckCommands),
}

#[derive(Subcommand, Debug)]
pub enum CheckCommands {
    Cpf { value: String },
    Email { value: String },
    Phone { value: String },
}
