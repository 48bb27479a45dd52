//! Home page game selection.
//!
//! The home page shows two sets: up to five featured games drawn at random,
//! then up to five of the most recently updated games that were not featured.
//! Newest depends on featured, so the pair is computed together by
//! [`select_home_games`].

use crate::types::GameRecord;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;

/// Cards shown in each home page section.
pub const HOME_SECTION_SIZE: usize = 5;

/// Random subset of `min(5, N)` distinct records, in shuffled order.
pub fn select_featured<R: Rng + ?Sized>(games: &[GameRecord], rng: &mut R) -> Vec<GameRecord> {
    let mut featured: Vec<GameRecord> = games
        .choose_multiple(rng, HOME_SECTION_SIZE)
        .cloned()
        .collect();
    featured.shuffle(rng);
    featured
}

/// Up to five records by `updated_at` descending, skipping featured ids.
///
/// Records without a timestamp sort last. Exclusion happens before
/// truncation, so the result is as full as the remaining records allow.
pub fn select_newest(games: &[GameRecord], featured: &[GameRecord]) -> Vec<GameRecord> {
    let featured_ids: HashSet<u64> = featured.iter().map(|g| g.id).collect();
    let mut candidates: Vec<&GameRecord> = games
        .iter()
        .filter(|g| !featured_ids.contains(&g.id))
        .collect();
    // Option orders None first; reversing puts it last
    candidates.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    candidates
        .into_iter()
        .take(HOME_SECTION_SIZE)
        .cloned()
        .collect()
}

/// Featured and newest sets for the home page.
#[derive(Debug, Clone)]
pub struct HomeSelection {
    pub featured: Vec<GameRecord>,
    pub newest: Vec<GameRecord>,
}

impl HomeSelection {
    /// Every selected record, featured first.
    pub fn all(&self) -> impl Iterator<Item = &GameRecord> {
        self.featured.iter().chain(self.newest.iter())
    }
}

/// Draw the featured set, then the newest set excluding it.
pub fn select_home_games<R: Rng + ?Sized>(games: &[GameRecord], rng: &mut R) -> HomeSelection {
    let featured = select_featured(games, rng);
    let newest = select_newest(games, &featured);
    HomeSelection { featured, newest }
}
