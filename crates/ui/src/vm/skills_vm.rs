use directory_core::ProfileId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SKILLS: [&str; 4] = ["Leadership", "Communication", "Problem Solving", "Teamwork"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillRatingVm {
    pub name: &'static str,
    /// Out of 5.
    pub rating: u8,
    /// Width of the progress bar, in percent.
    pub bar_percent: u8,
}

/// Placeholder skill ratings.
///
/// Seeded from the profile id so the same profile always renders the same
/// numbers.
#[must_use]
pub fn placeholder_skills(id: &ProfileId) -> Vec<SkillRatingVm> {
    let mut rng = StdRng::seed_from_u64(seed_for(id));
    SKILLS
        .iter()
        .map(|&name| SkillRatingVm {
            name,
            rating: rng.random_range(4..=5),
            bar_percent: rng.random_range(80..100),
        })
        .collect()
}

// FNV-1a, stable across builds and platforms.
fn seed_for(id: &ProfileId) -> u64 {
    id.as_str()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        })
}
