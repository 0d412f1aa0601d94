use crate::lexicon::{LORE_TEMPLATES, LoreCategory, NAME_PLACEHOLDER};
use crate::template;
use rand::Rng;
use rand::seq::SliceRandom;

/// Compose a one-sentence origin story for `name`.
///
/// Only the categories the chosen template references are drawn, in the
/// order they appear.
pub fn compose_lore<R: Rng + ?Sized>(rng: &mut R, name: &str) -> String {
    let lore_template = LORE_TEMPLATES
        .choose(rng)
        .copied()
        .unwrap_or(LORE_TEMPLATES[0]);

    template::render(lore_template, |key| {
        if key == NAME_PLACEHOLDER {
            return Some(name);
        }
        LoreCategory::from_key(key).map(|category| {
            category
                .words()
                .choose(rng)
                .copied()
                .unwrap_or_default()
        })
    })
}
