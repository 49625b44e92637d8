//! Random machine and image names

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::collections::HashSet;

/// Candidates drawn before giving up on avoiding the taken pool
pub const MAX_ATTEMPTS: usize = 10;

/// Widest numeric suffix whose range still fits in a `u64`
pub const MAX_SUFFIX_DIGITS: u32 = 19;

/// Returned when a convention only ever produces empty names
const FALLBACK_NAME: &str = "instance";

/// A way of producing candidate names
pub trait NameConvention: Send + Sync {
    /// Draw one candidate
    fn candidate(&self, rng: &mut dyn RngCore) -> String;
}

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brave", "calm", "clever", "cosmic", "crisp", "eager", "fancy", "gentle",
    "golden", "happy", "jolly", "keen", "lively", "lucky", "mellow", "nimble", "proud", "quiet",
    "rapid", "shiny", "silent", "steady", "sunny", "swift", "tidy", "vivid", "witty", "zesty",
];

const NOUNS: &[&str] = &[
    "badger", "beacon", "comet", "falcon", "fjord", "glacier", "harbor", "heron", "island",
    "lagoon", "lynx", "maple", "meadow", "nebula", "otter", "panda", "pebble", "quasar", "raven",
    "river", "sparrow", "summit", "tiger", "tundra", "valley", "walrus", "willow", "zephyr",
];

/// `<adjective>-<noun>` names, optionally followed by a zero-padded number
#[derive(Debug, Clone)]
pub struct WordConvention {
    adjectives: &'static [&'static str],
    nouns: &'static [&'static str],
    suffix_digits: u32,
}

impl WordConvention {
    /// Convention with custom word lists; `suffix_digits` is capped at
    /// [`MAX_SUFFIX_DIGITS`]
    pub const fn new(
        adjectives: &'static [&'static str],
        nouns: &'static [&'static str],
        suffix_digits: u32,
    ) -> Self {
        let suffix_digits = if suffix_digits > MAX_SUFFIX_DIGITS {
            MAX_SUFFIX_DIGITS
        } else {
            suffix_digits
        };
        Self {
            adjectives,
            nouns,
            suffix_digits,
        }
    }

    /// Machine names, e.g. `brave-otter`
    pub const fn machine() -> Self {
        Self::new(ADJECTIVES, NOUNS, 0)
    }

    /// Image names, e.g. `quiet-heron-0412`
    pub const fn image() -> Self {
        Self::new(ADJECTIVES, NOUNS, 4)
    }
}

impl NameConvention for WordConvention {
    fn candidate(&self, rng: &mut dyn RngCore) -> String {
        let words: Vec<&str> = [self.adjectives, self.nouns]
            .iter()
            .filter_map(|list| list.choose(rng).copied())
            .collect();
        let base = words.join("-");

        if self.suffix_digits == 0 {
            return base;
        }

        let width = self.suffix_digits as usize;
        let number = rng.gen_range(0..10u64.pow(self.suffix_digits));
        if base.is_empty() {
            format!("{number:0width$}")
        } else {
            format!("{base}-{number:0width$}")
        }
    }
}

/// Draw a name from `convention` that is not in `taken`.
///
/// Gives up after [`MAX_ATTEMPTS`] draws and returns the last candidate even
/// if it collides. The result is never empty.
pub fn unique_name(
    convention: &dyn NameConvention,
    taken: &HashSet<String>,
    rng: &mut dyn RngCore,
) -> String {
    let mut last = None;

    for _ in 0..MAX_ATTEMPTS {
        let candidate = convention.candidate(rng);
        if candidate.is_empty() {
            continue;
        }
        if !taken.contains(&candidate) {
            return candidate;
        }
        last = Some(candidate);
    }

    last.unwrap_or_else(|| FALLBACK_NAME.to_string())
}
