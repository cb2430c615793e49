//! Vocabulary supply for fresh populations.

use rand::Rng;
use rand::seq::SliceRandom;

/// Noun table agents draw their starting vocabulary from.
pub const NOUNS: &[&str] = &[
    "anchor", "basket", "candle", "dagger", "ember", "fjord", "garnet", "harbor", "island",
    "jigsaw", "kettle", "lantern", "meadow", "nectar", "orchard", "pebble", "quarry", "ribbon",
    "saddle", "thimble", "umbrella", "violet", "walnut", "yarrow", "zephyr", "beacon", "cobble",
    "drizzle", "echo", "fathom", "glacier", "hollow", "ivory", "juniper", "knoll", "lagoon",
    "marble", "nimbus", "oriole", "prairie", "quiver", "russet", "sparrow", "tundra", "vessel",
    "willow",
];

/// Uniform choice from the noun table.
pub fn random_noun<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    NOUNS.choose(rng).copied().expect("noun table is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_noun_comes_from_the_table() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            assert!(NOUNS.contains(&random_noun(&mut rng)));
        }
    }

    #[test]
    fn table_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for noun in NOUNS {
            assert!(seen.insert(noun));
        }
    }
}
