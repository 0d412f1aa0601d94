use crate::storage::RegistryStatus;
use anyhow::{Context, Result};

use super::CommandContext;
use super::utils::print_registry;

pub const MISSING_MESSAGE: &str = "Registry does not exist yet. Create a pet first!";
pub const EMPTY_MESSAGE: &str = "Pet registry is empty. Create a pet first!";
pub const CORRUPTED_MESSAGE: &str = "Error reading registry. The file may be corrupted.";

pub fn handle_list(ctx: &CommandContext, json: bool) -> Result<()> {
    let status = ctx
        .registry
        .inspect()
        .with_context(|| format!("Failed to read registry at {}", ctx.registry.location()))?;

    match status {
        RegistryStatus::Missing | RegistryStatus::Empty if json => println!("[]"),
        RegistryStatus::Missing => println!("{}", MISSING_MESSAGE),
        RegistryStatus::Empty => println!("{}", EMPTY_MESSAGE),
        RegistryStatus::Corrupted => println!("{}", CORRUPTED_MESSAGE),
        RegistryStatus::Records(records) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print_registry(&records);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OracleConfig;
    use crate::model::PetRecord;
    use crate::storage::{JsonFileRegistry, MemoryRegistry};
    use tempfile::TempDir;

    #[test]
    fn test_list_missing_registry() {
        let ctx =
            CommandContext::with_registry(OracleConfig::default(), Box::new(MemoryRegistry::new()));
        handle_list(&ctx, false).unwrap();
        handle_list(&ctx, true).unwrap();
    }

    #[test]
    fn test_list_records() {
        let registry = MemoryRegistry::with_records(vec![
            PetRecord::new(
                "Bubblefin".to_string(),
                "fish".to_string(),
                "shy".to_string(),
                vec!["hides".to_string(), "blows bubbles".to_string()],
                "Born from a water storm, Bubblefin carries the essence of patience within their soul."
                    .to_string(),
            )
            .stamp(),
        ]);
        let ctx = CommandContext::with_registry(OracleConfig::default(), Box::new(registry));
        handle_list(&ctx, false).unwrap();
        handle_list(&ctx, true).unwrap();
    }

    #[test]
    fn test_list_corrupted_file_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pet_registry.json");
        std::fs::write(&path, "not json").unwrap();

        let ctx = CommandContext::with_registry(
            OracleConfig::default(),
            Box::new(JsonFileRegistry::new(path)),
        );
        handle_list(&ctx, false).unwrap();
    }
}
