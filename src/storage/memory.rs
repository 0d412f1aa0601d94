use super::registry::{Registry, RegistryStatus};
use crate::{error::Result, model::PetRecord};
use std::cell::RefCell;

/// In-process registry. `None` until the first append, mirroring a
/// registry file that has not been created yet.
#[derive(Default)]
pub struct MemoryRegistry {
    records: RefCell<Option<Vec<PetRecord>>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that already holds `records`.
    pub fn with_records(records: Vec<PetRecord>) -> Self {
        Self {
            records: RefCell::new(Some(records)),
        }
    }
}

impl Registry for MemoryRegistry {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> Result<Vec<PetRecord>> {
        Ok(self.records.borrow().clone().unwrap_or_default())
    }

    fn inspect(&self) -> Result<RegistryStatus> {
        Ok(match self.records.borrow().as_ref() {
            None => RegistryStatus::Missing,
            Some(records) if records.is_empty() => RegistryStatus::Empty,
            Some(records) => RegistryStatus::Records(records.clone()),
        })
    }

    fn append(&self, record: PetRecord) -> Result<PetRecord> {
        let record = record.stamp();
        self.records
            .borrow_mut()
            .get_or_insert_with(Vec::new)
            .push(record.clone());
        Ok(record)
    }
}
