use super::registry::{Registry, RegistryStatus, decode_records, status_of};
use crate::{
    error::{OracleError, Result},
    model::PetRecord,
};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Registry kept as a pretty-printed JSON array in a single file.
///
/// Every append rewrites the whole file. There is no locking: concurrent
/// writers race and the last one wins.
pub struct JsonFileRegistry {
    path: PathBuf,
}

impl JsonFileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file content, `None` if the file does not exist.
    fn read_raw(&self) -> Result<Option<Vec<u8>>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write via a temp file in the target directory, then rename over it.
    ///
    /// A read-only registry is refused rather than replaced, and an existing
    /// file keeps its permissions.
    fn atomic_write(&self, content: &str) -> Result<()> {
        let existing = match std::fs::metadata(&self.path) {
            Ok(meta) => Some(meta.permissions()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        if existing.as_ref().is_some_and(|perms| perms.readonly()) {
            return Err(OracleError::Storage(format!(
                "{} is read-only",
                self.path.display()
            )));
        }

        let target_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(target_dir).map_err(|e| {
            OracleError::Storage(format!(
                "Failed to create temp file in {}: {}",
                target_dir.display(),
                e
            ))
        })?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| OracleError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| OracleError::Storage(format!("Failed to sync temp file: {}", e)))?;

        if let Some(perms) = existing {
            temp_file.as_file().set_permissions(perms).map_err(|e| {
                OracleError::Storage(format!("Failed to set temp file permissions: {}", e))
            })?;
        }

        temp_file.persist(&self.path).map_err(|e| {
            OracleError::Storage(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e.error
            ))
        })?;

        Ok(())
    }
}

impl Registry for JsonFileRegistry {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<PetRecord>> {
        Ok(self
            .read_raw()?
            .and_then(|bytes| decode_records(&bytes))
            .unwrap_or_default())
    }

    fn inspect(&self) -> Result<RegistryStatus> {
        let raw = self.read_raw()?;
        Ok(status_of(raw.as_deref()))
    }

    fn append(&self, record: PetRecord) -> Result<PetRecord> {
        // Start from what `load` sees, so a malformed registry is replaced.
        let mut records = self.load()?;

        let record = record.stamp();
        tracing::info!(
            path = %self.path.display(),
            name = %record.name,
            existing = records.len(),
            "Appending pet to registry"
        );

        records.push(record.clone());
        let content = serde_json::to_string_pretty(&records)?;
        self.atomic_write(&content)?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use tempfile::TempDir;

    fn setup_test_registry() -> (JsonFileRegistry, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let registry = JsonFileRegistry::new(temp_dir.path().join("pet_registry.json"));
        (registry, temp_dir)
    }

    fn record(name: &str) -> PetRecord {
        PetRecord::new(
            name.to_string(),
            "dog".to_string(),
            "loving".to_string(),
            vec![],
            format!("{} was once the companion of a great bard.", name),
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (registry, _temp_dir) = setup_test_registry();
        assert!(registry.load().unwrap().is_empty());
        assert_eq!(registry.inspect().unwrap(), RegistryStatus::Missing);
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let (registry, _temp_dir) = setup_test_registry();
        std::fs::write(registry.path(), "not json").unwrap();

        assert!(registry.load().unwrap().is_empty());
        assert_eq!(registry.inspect().unwrap(), RegistryStatus::Corrupted);
    }

    #[test]
    fn test_append_twice_then_load() {
        let (registry, _temp_dir) = setup_test_registry();

        let first = registry.append(record("Duke Barkster")).unwrap();
        let second = registry.append(record("Lady Wag")).unwrap();

        let loaded = registry.load().unwrap();
        assert_eq!(loaded, vec![first.clone(), second.clone()]);
        assert_eq!(loaded[0].name, "Duke Barkster");
        assert_eq!(loaded[1].name, "Lady Wag");

        let t1 = DateTime::parse_from_rfc3339(&loaded[0].created_at).unwrap();
        let t2 = DateTime::parse_from_rfc3339(&loaded[1].created_at).unwrap();
        assert!(t2 >= t1);
    }

    #[test]
    fn test_append_writes_indented_array() {
        let (registry, _temp_dir) = setup_test_registry();
        registry.append(record("Pal")).unwrap();

        let content = std::fs::read_to_string(registry.path()).unwrap();
        assert!(content.starts_with("[\n  {\n    \"name\": \"Pal\""), "{}", content);
        assert!(content.contains("\"quirks\": []"));
    }

    #[test]
    fn test_append_over_garbage_starts_fresh() {
        let (registry, _temp_dir) = setup_test_registry();
        std::fs::write(registry.path(), "{{{ definitely not json").unwrap();

        registry.append(record("Fresh Start")).unwrap();

        let loaded = registry.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Fresh Start");
    }

    #[test]
    fn test_append_over_partial_entries_is_visible_to_load() {
        let (registry, _temp_dir) = setup_test_registry();
        std::fs::write(registry.path(), r#"[{"name": "Legacy"}]"#).unwrap();
        assert!(registry.load().unwrap().is_empty());

        let saved = registry.append(record("Newcomer")).unwrap();

        assert_eq!(registry.load().unwrap(), vec![saved.clone()]);
        assert_eq!(
            registry.inspect().unwrap(),
            RegistryStatus::Records(vec![saved])
        );
    }

    #[test]
    fn test_append_over_blank_object() {
        let (registry, _temp_dir) = setup_test_registry();
        std::fs::write(registry.path(), "{}").unwrap();
        assert_eq!(registry.inspect().unwrap(), RegistryStatus::Empty);

        registry.append(record("Solo")).unwrap();

        let loaded = registry.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Solo");
    }

    #[test]
    fn test_append_to_read_only_registry_fails() {
        let (registry, _temp_dir) = setup_test_registry();
        registry.append(record("Keeper")).unwrap();
        let before = std::fs::read_to_string(registry.path()).unwrap();

        let mut perms = std::fs::metadata(registry.path()).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(registry.path(), perms).unwrap();

        let result = registry.append(record("Intruder"));
        assert!(matches!(result, Err(OracleError::Storage(_))));
        assert_eq!(std::fs::read_to_string(registry.path()).unwrap(), before);
    }

    #[cfg(unix)]
    #[test]
    fn test_append_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let (registry, _temp_dir) = setup_test_registry();
        std::fs::write(registry.path(), "[]").unwrap();
        std::fs::set_permissions(registry.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        registry.append(record("Homebody")).unwrap();

        let mode = std::fs::metadata(registry.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_inspect_empty_array() {
        let (registry, _temp_dir) = setup_test_registry();
        std::fs::write(registry.path(), "[]").unwrap();
        assert_eq!(registry.inspect().unwrap(), RegistryStatus::Empty);
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let registry = JsonFileRegistry::new(temp_dir.path().join("no/such/dir/pets.json"));

        let result = registry.append(record("Lost"));
        assert!(matches!(result, Err(OracleError::Storage(_))));
    }

    #[test]
    fn test_location_is_path() {
        let registry = JsonFileRegistry::new("pets.json");
        assert_eq!(registry.location(), "pets.json");
    }
}
