use crate::compose::Oracle;
use crate::model::PetRecord;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::print_reading;

/// Parameters for generate operation
pub struct GenerateParams {
    pub pet_type: String,
    pub personality: String,
    pub quirks: Vec<String>,
    pub save: bool,
    pub json: bool,
}

pub fn handle_generate(ctx: &CommandContext, params: GenerateParams) -> Result<()> {
    let mut oracle = Oracle::from_seed(ctx.config.seed);

    if !params.json {
        println!("🔮 The Pet Name Oracle is channeling mystical energies... 🔮\n");
    }

    let reading = oracle.reading(&params.pet_type, &params.personality, &params.quirks);

    // Records keep what the user typed, not the resolved categories.
    let record = PetRecord::new(
        reading.name.text.clone(),
        params.pet_type.to_lowercase(),
        params.personality.to_lowercase(),
        params.quirks,
        reading.lore.clone(),
    );

    if params.json {
        let saved = if params.save {
            Some(save(ctx, record.clone())?)
        } else {
            None
        };
        let output = serde_json::json!({
            "name": reading.name.text,
            "pet_type": record.pet_type,
            "personality": record.personality,
            "resolved_pet_type": reading.name.pet_type,
            "resolved_personality": reading.name.personality,
            "quirks": record.quirks,
            "lore": reading.lore,
            "saved": saved.map(|r| serde_json::json!({
                "registry": ctx.registry.location(),
                "created_at": r.created_at,
            })),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_reading(&reading);

    if params.save {
        save(ctx, record)?;
        println!(
            "{} {}",
            "Pet saved to registry at".green(),
            ctx.registry.location()
        );
    }
    Ok(())
}

fn save(ctx: &CommandContext, record: PetRecord) -> Result<PetRecord> {
    ctx.registry
        .append(record)
        .with_context(|| format!("Failed to save pet to {}", ctx.registry.location()))
}
