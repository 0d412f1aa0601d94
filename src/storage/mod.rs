//! Registry of saved pets.
//!
//! The registry is a single JSON file holding an array of records, appended
//! to on every save:
//!
//! ```json
//! [
//!   {
//!     "name": "Sir Barkington",
//!     "pet_type": "dog",
//!     "personality": "playful",
//!     "quirks": ["fetches socks"],
//!     "lore": "Legend says Sir Barkington was born under a full moon ...",
//!     "created_at": "2026-10-15T09:30:00.123456+02:00"
//!   }
//! ]
//! ```
//!
//! ## Components
//!
//! - [`Registry`]: the load/inspect/append interface
//! - [`JsonFileRegistry`]: the file-backed registry
//! - [`MemoryRegistry`]: an in-process registry

mod json_file;
mod memory;
mod registry;

pub use json_file::JsonFileRegistry;
pub use memory::MemoryRegistry;
pub use registry::{Registry, RegistryStatus};
