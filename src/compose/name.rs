use crate::lexicon::{NAME_PATTERNS, Personality, PetType};
use crate::template::{self, capitalize};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Chance that an eligible quirk word is added to a pool.
pub const QUIRK_INJECTION_CHANCE: f64 = 0.3;

/// Quirk words this short are never added to a pool.
pub const MIN_QUIRK_INJECT_LEN: usize = 4;

/// A composed name together with how it was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetName {
    pub text: String,
    pub pattern: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    pub pet_type: PetType,
    pub personality: Personality,
}

/// Per-call word pools: the pet type's words followed by the personality's,
/// plus any injected quirk words.
#[derive(Debug, Clone)]
pub(crate) struct NamePools<'q> {
    pub prefixes: Vec<&'q str>,
    pub bases: Vec<&'q str>,
    pub suffixes: Vec<&'q str>,
}

impl<'q> NamePools<'q> {
    pub fn combine(pet_type: PetType, personality: Personality) -> Self {
        let (t, p) = (pet_type.pool(), personality.pool());
        Self {
            prefixes: t.prefixes.iter().chain(p.prefixes).copied().collect(),
            bases: t.bases.iter().chain(p.bases).copied().collect(),
            suffixes: t.suffixes.iter().chain(p.suffixes).copied().collect(),
        }
    }

    fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
        pool.choose(rng).map(|w| w.to_string()).unwrap_or_default()
    }
}

/// The word a quirk contributes: its first whitespace-separated token,
/// title-cased. Blank quirks contribute nothing.
pub fn quirk_word(quirk: &str) -> Option<String> {
    quirk.split_whitespace().next().map(capitalize)
}

/// Compose a pet name.
///
/// Unknown `pet_type` input falls back to [`PetType::Other`]; unknown
/// `personality` input is replaced by a uniformly random known personality.
pub fn compose_name<R, S>(
    rng: &mut R,
    pet_type: &str,
    personality: &str,
    quirks: &[S],
) -> PetName
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let pet_type = PetType::normalize(pet_type);
    let personality = match Personality::from_key(personality) {
        Some(p) => p,
        None => {
            let picked = *Personality::ALL
                .choose(rng)
                .unwrap_or(&Personality::Playful);
            tracing::debug!(input = personality, picked = %picked, "Unknown personality");
            picked
        }
    };

    let words: Vec<String> = quirks
        .iter()
        .filter_map(|q| quirk_word(q.as_ref()))
        .collect();

    let mut pools = NamePools::combine(pet_type, personality);
    for word in &words {
        if word.chars().count() < MIN_QUIRK_INJECT_LEN {
            continue;
        }
        if rng.gen_bool(QUIRK_INJECTION_CHANCE) {
            if rng.gen_bool(0.5) {
                pools.prefixes.push(word.as_str());
            } else {
                pools.bases.push(word.as_str());
            }
            tracing::debug!(word = %word, "Injected quirk word");
        }
    }

    let pattern = NAME_PATTERNS.choose(rng).copied().unwrap_or(NAME_PATTERNS[0]);

    let prefix = template::references(pattern, "prefix")
        .then(|| NamePools::pick(&pools.prefixes, rng));
    let base = NamePools::pick(&pools.bases, rng);
    let suffix = template::references(pattern, "suffix")
        .then(|| NamePools::pick(&pools.suffixes, rng));

    let text = template::render(pattern, |key| match key {
        "prefix" => Some(prefix.as_deref().unwrap_or_default()),
        "base" => Some(base.as_str()),
        "suffix" => Some(suffix.as_deref().unwrap_or_default()),
        _ => None,
    })
    .trim()
    .to_string();

    tracing::debug!(
        name = %text,
        pattern,
        pet_type = %pet_type,
        personality = %personality,
        "Composed name"
    );

    PetName {
        text,
        pattern,
        prefix,
        base,
        suffix,
        pet_type,
        personality,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn assert_well_formed(name: &PetName, extra: &[&str]) {
        let pools = NamePools::combine(name.pet_type, name.personality);
        let in_pool = |pool: &[&str], word: &str| {
            pool.iter().any(|w| *w == word) || extra.iter().any(|w| *w == word)
        };

        assert!(!name.text.is_empty());
        assert_eq!(name.text, name.text.trim());
        assert!(in_pool(pools.bases.as_slice(), name.base.as_str()), "bad base {}", name.base);
        if let Some(ref prefix) = name.prefix {
            assert!(in_pool(pools.prefixes.as_slice(), prefix.as_str()), "bad prefix {}", prefix);
        }
        if let Some(ref suffix) = name.suffix {
            assert!(pools.suffixes.contains(&suffix.as_str()), "bad suffix {}", suffix);
        }
        assert_eq!(name.prefix.is_some(), template::references(name.pattern, "prefix"));
        assert_eq!(name.suffix.is_some(), template::references(name.pattern, "suffix"));
    }

    #[test]
    fn test_quirk_word() {
        assert_eq!(quirk_word("sparkles"), Some("Sparkles".to_string()));
        assert_eq!(quirk_word("  loves   belly rubs "), Some("Loves".to_string()));
        assert_eq!(quirk_word("ZOOMIES"), Some("Zoomies".to_string()));
        assert_eq!(quirk_word(""), None);
        assert_eq!(quirk_word("   \t "), None);
    }

    #[test]
    fn test_pools_combine_type_then_personality() {
        let pools = NamePools::combine(PetType::Dog, Personality::Lazy);
        assert_eq!(pools.prefixes.len(), 15);
        assert_eq!(pools.prefixes[0], "Sir");
        assert_eq!(pools.prefixes[10], "Sleepy");
        assert_eq!(pools.bases.last(), Some(&"Lazy"));
        assert_eq!(pools.suffixes.last(), Some(&"zzz"));
    }

    #[test]
    fn test_all_known_pairs_produce_names() {
        let mut rng = rng(1);
        for pet_type in PetType::ALL {
            for personality in Personality::ALL {
                for _ in 0..20 {
                    let name =
                        compose_name(&mut rng, pet_type.key(), personality.key(), &[] as &[&str]);
                    assert_eq!(name.pet_type, pet_type);
                    assert_eq!(name.personality, personality);
                    assert_well_formed(&name, &[]);
                }
            }
        }
    }

    #[test]
    fn test_unknown_pet_type_behaves_like_other() {
        let unknown = compose_name(&mut rng(5), "dragon", "shy", &[] as &[&str]);
        let other = compose_name(&mut rng(5), "other", "shy", &[] as &[&str]);
        assert_eq!(unknown, other);
        assert_eq!(unknown.pet_type, PetType::Other);
    }

    #[test]
    fn test_unknown_personality_picks_a_known_one() {
        let mut rng = rng(9);
        for _ in 0..200 {
            let name = compose_name(&mut rng, "cat", "sassy", &[] as &[&str]);
            assert!(Personality::ALL.contains(&name.personality));
            assert_well_formed(&name, &[]);
        }
    }

    #[test]
    fn test_input_case_is_ignored() {
        let upper = compose_name(&mut rng(3), "CAT", "Loving", &[] as &[&str]);
        let lower = compose_name(&mut rng(3), "cat", "loving", &[] as &[&str]);
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_same_seed_same_name() {
        let quirks = ["Sparkles", "naps a lot"];
        let a = compose_name(&mut rng(77), "bird", "curious", &quirks);
        let b = compose_name(&mut rng(77), "bird", "curious", &quirks);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sparkles_only_ever_appears_whole() {
        let mut rng = rng(2024);
        let mut injected = false;
        for _ in 0..1000 {
            let name = compose_name(&mut rng, "cat", "loving", &["Sparkles"]);
            assert_eq!(name.pet_type, PetType::Cat);
            assert_eq!(name.personality, Personality::Loving);
            assert_well_formed(&name, &["Sparkles"]);
            injected |= name.prefix.as_deref() == Some("Sparkles") || name.base == "Sparkles";
            assert!(!name.text.contains("Spa") || name.text.contains("Sparkles"));
        }
        assert!(injected, "Sparkles was never injected in 1000 draws");
    }

    #[test]
    fn test_degenerate_quirks_never_injected() {
        let quirks = ["", "   ", "cat", "a b c", "Zed", "\t"];
        let mut rng = rng(11);
        for _ in 0..500 {
            let name = compose_name(&mut rng, "dog", "fierce", &quirks);
            assert_well_formed(&name, &[]);
        }
    }

    #[test]
    fn test_short_quirks_do_not_consume_randomness() {
        let with_short = compose_name(&mut rng(42), "fish", "playful", &["Bob", "", "  "]);
        let without = compose_name(&mut rng(42), "fish", "playful", &[] as &[&str]);
        assert_eq!(with_short, without);
    }

    #[test]
    fn test_only_first_token_of_quirk_is_used() {
        let mut rng = rng(8);
        for _ in 0..500 {
            let name = compose_name(&mut rng, "rodent", "grumpy", &["nibbles everything"]);
            assert_well_formed(&name, &["Nibbles"]);
            assert!(!name.text.contains("everything"));
        }
    }
}
