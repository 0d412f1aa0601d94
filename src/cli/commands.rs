use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pet-oracle")]
#[command(
    author,
    version,
    about = "Pet Name Oracle - Generate mystical pet names with lore"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed the oracle so the same command reveals the same name
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new pet name
    #[command(visible_alias = "gen")]
    Generate {
        /// Type of pet (dog, cat, bird, fish, reptile, rodent, other)
        #[arg(short = 't', long)]
        pet_type: String,

        /// Pet's personality (playful, lazy, fierce, shy, curious, loving, grumpy)
        #[arg(short, long)]
        personality: String,

        /// Unique quirks or traits of your pet (space-separated)
        #[arg(short, long, num_args = 1..)]
        quirks: Vec<String>,

        /// Save the generated name to the registry
        #[arg(short, long)]
        save: bool,

        /// Path to registry file (default: pet_registry.json)
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all pets in the registry
    #[command(visible_alias = "ls")]
    List {
        /// Path to registry file (default: pet_registry.json)
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
