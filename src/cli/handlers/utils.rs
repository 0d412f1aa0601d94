use crate::compose::Reading;
use crate::model::PetRecord;
use crate::template::capitalize;
use colored::Colorize;

pub fn print_reading(reading: &Reading) {
    println!(
        "✨ The Oracle reveals the name: {} ✨",
        reading.name.text.cyan().bold()
    );
    println!("\n{}\n{}\n", "Origin Story:".bold(), reading.lore);
}

pub fn print_registry(records: &[PetRecord]) {
    println!("\n{}", "=== 🐾 PET REGISTRY 🐾 ===".bold());

    for (i, pet) in records.iter().enumerate() {
        println!(
            "\n{}. {} - {}",
            i + 1,
            pet.name.cyan().bold(),
            capitalize(&pet.pet_type).blue()
        );
        println!("   Personality: {}", capitalize(&pet.personality).magenta());
        println!("   Quirks: {}", pet.quirks.join(", "));
        println!("   Created: {}", pet.created_at.dimmed());
        println!("   Lore: {}", pet.lore);
    }

    println!("\n{}", "=========================".bold());
}
