use crate::error::Result;
use crate::model::PetRecord;
use serde_json::Value;

/// What a strict read of the registry found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryStatus {
    /// Nothing has been saved yet.
    Missing,
    /// The registry exists but holds no pets.
    Empty,
    Records(Vec<PetRecord>),
    /// Not a JSON array of complete records.
    Corrupted,
}

/// Append-only store of saved pets.
pub trait Registry {
    /// Where the records live, for user-facing messages.
    fn location(&self) -> String;

    /// All saved records in insertion order.
    ///
    /// A missing or unreadable-as-records registry is an empty one; only
    /// I/O failures are errors.
    fn load(&self) -> Result<Vec<PetRecord>>;

    /// Like [`Registry::load`], but reports why nothing came back.
    fn inspect(&self) -> Result<RegistryStatus>;

    /// Stamp `record` with the current time, add it to the end and persist
    /// the whole registry. Returns the stamped record.
    fn append(&self, record: PetRecord) -> Result<PetRecord>;
}

/// Decode a complete registry. `None` if any part of it is malformed.
///
/// Values that read as nothing (`null`, `false`, `0`, `""`, `[]`, `{}`)
/// decode to an empty registry.
pub(crate) fn decode_records(bytes: &[u8]) -> Option<Vec<PetRecord>> {
    let value = match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Registry content is not valid JSON");
            return None;
        }
    };

    if is_blank(&value) {
        return Some(Vec::new());
    }

    match serde_json::from_value::<Vec<PetRecord>>(value) {
        Ok(records) => Some(records),
        Err(e) => {
            tracing::warn!(error = %e, "Registry content is not a list of pet records");
            None
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(entries) => entries.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Classify the raw registry content, `None` meaning it does not exist.
pub(crate) fn status_of(bytes: Option<&[u8]>) -> RegistryStatus {
    match bytes.map(decode_records) {
        None => RegistryStatus::Missing,
        Some(None) => RegistryStatus::Corrupted,
        Some(Some(records)) if records.is_empty() => RegistryStatus::Empty,
        Some(Some(records)) => RegistryStatus::Records(records),
    }
}
