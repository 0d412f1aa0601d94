//! # Pet Name Oracle - mystical pet names with lore
//!
//! The oracle composes a pet name from word pools chosen by pet type and
//! personality, spins a one-sentence origin story around it, and can keep
//! the result in a JSON registry file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Ask the oracle for a name
//! pet-oracle generate --pet-type cat --personality loving --quirks Sparkles
//!
//! # Keep it
//! pet-oracle generate -t dog -p playful -q "fetches socks" --save
//!
//! # See every pet saved so far
//! pet-oracle list
//! ```
//!
//! ## Library use
//!
//! ```
//! use pet_oracle::compose::Oracle;
//!
//! let mut oracle = Oracle::seeded(7);
//! let reading = oracle.reading("cat", "loving", &["Sparkles"]);
//! assert!(reading.lore.contains(&reading.name.text));
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`compose`]: Name and lore composition
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`lexicon`]: Static word pools and templates
//! - [`model`]: The saved pet record
//! - [`storage`]: The registry of saved pets

/// Command-line interface definitions using clap.
pub mod cli;

/// Name and lore composition.
pub mod compose;

/// Configuration loading.
///
/// Handles the optional `.pet-oracle.toml` file and command-line overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `OracleError` enum and `Result<T>` type alias.
pub mod error;

/// Static word pools, name patterns and lore templates.
pub mod lexicon;

pub mod logging;

/// Data models for saved pets.
pub mod model;

/// Registry of saved pets.
///
/// Reads and appends the JSON registry file, tolerating missing or corrupt files.
pub mod storage;

pub mod template;
