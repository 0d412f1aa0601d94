//! Data models for the pet registry.
//!
//! - [`PetRecord`]: one saved pet, as stored in the registry file

mod record;

pub use record::{PetRecord, now_iso8601};
