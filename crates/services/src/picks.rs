//! Stateless draws from the fixed content catalogs.

use rand::Rng;

use hub_core::catalog::{CHALLENGES, QUOTES};

/// Uniformly picks a motivational quote.
pub fn pick_random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(&QUOTES, rng)
}

/// Uniformly picks a daily challenge.
pub fn pick_random_challenge<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(&CHALLENGES, rng)
}

fn pick<R: Rng + ?Sized>(catalog: &[&'static str], rng: &mut R) -> &'static str {
    catalog[rng.random_range(0..catalog.len())]
}
