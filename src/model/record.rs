use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};

/// One saved pet: an element of the registry's JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    pub name: String,
    pub pet_type: String,
    pub personality: String,
    pub quirks: Vec<String>,
    pub lore: String,

    /// ISO-8601 local time, set when the record is appended to a registry.
    pub created_at: String,
}

impl PetRecord {
    /// A record that has not been saved yet (`created_at` is empty).
    pub fn new(
        name: String,
        pet_type: String,
        personality: String,
        quirks: Vec<String>,
        lore: String,
    ) -> Self {
        Self {
            name,
            pet_type,
            personality,
            quirks,
            lore,
            created_at: String::new(),
        }
    }

    /// Set `created_at` to the current local time.
    pub fn stamp(mut self) -> Self {
        self.created_at = now_iso8601();
        self
    }

    pub fn is_stamped(&self) -> bool {
        !self.created_at.is_empty()
    }
}

/// Current local time as RFC 3339 with microseconds and a numeric offset.
pub fn now_iso8601() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
