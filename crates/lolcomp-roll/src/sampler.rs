//! Uniform sampling without replacement over the (optionally filtered)
//! catalog.

use rand::Rng;
use rand::seq::SliceRandom;

use lolcomp_types::{CatalogSnapshot, ChampionRecord};

use crate::selection::Selection;

/// Target composition size.
pub const ROLL_SIZE: usize = 5;

/// Roll a composition of up to [`ROLL_SIZE`] champions.
///
/// An empty selection, or one with every role toggled, samples from the
/// whole catalog; otherwise the population is the champions whose tag set
/// intersects the selection (OR across selected roles). Sampling is uniform
/// and without replacement, so a population smaller than the target yields
/// a shorter roll rather than duplicates.
pub fn roll<R: Rng + ?Sized>(
    catalog: &CatalogSnapshot,
    selection: &Selection,
    rng: &mut R,
) -> Vec<ChampionRecord> {
    roll_n(catalog, selection, ROLL_SIZE, rng)
}

/// [`roll`] with an explicit target size.
pub fn roll_n<R: Rng + ?Sized>(
    catalog: &CatalogSnapshot,
    selection: &Selection,
    size: usize,
    rng: &mut R,
) -> Vec<ChampionRecord> {
    let unfiltered = selection.is_empty() || selection.covers_all_roles();
    let roles = selection.roles();
    let population: Vec<&ChampionRecord> = catalog
        .records()
        .filter(|record| unfiltered || record.has_any_role(&roles))
        .collect();
    population
        .choose_multiple(rng, size)
        .map(|record| (*record).clone())
        .collect()
}
