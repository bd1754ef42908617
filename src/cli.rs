use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inspect-photo")]
#[command(about = "PipeTech Mobile export image filing and rename-plan tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the image files under an export folder
    Scan {
        /// Export folder path
        #[arg(required = true)]
        folder: PathBuf,

        /// Glob pattern (default: configured pattern, initially *.jpg)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Print filenames only, without the directory part
        #[arg(long)]
        names_only: bool,
    },

    /// Copy all matching images into a single flat destination folder
    Copy {
        /// Export folder path
        #[arg(required = true)]
        folder: PathBuf,

        /// Destination folder (created if missing)
        #[arg(required = true)]
        destination: PathBuf,

        /// Glob pattern (default: configured pattern, initially *.jpg)
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Build the rename plan, grouped by inspection, as JSON
    Group {
        /// Export folder path
        #[arg(required = true)]
        folder: PathBuf,

        /// Glob pattern (default: configured pattern, initially *.jpg)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Designator rule override, e.g. A,A,I,F
        #[arg(short, long)]
        rule: Option<String>,
    },

    /// Show file and inspection counts for an export folder
    Stats {
        /// Export folder path
        #[arg(required = true)]
        folder: PathBuf,

        /// Glob pattern (default: configured pattern, initially *.jpg)
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Show or edit the persisted configuration
    Config {
        /// Set the default glob pattern
        #[arg(long)]
        set_pattern: Option<String>,

        /// Set the designator rule, e.g. A,A,I,F
        #[arg(long)]
        set_rule: Option<String>,

        /// Show the current configuration
        #[arg(long)]
        show: bool,
    },
}
