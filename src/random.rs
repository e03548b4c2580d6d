use rand::{seq::SliceRandom, Rng};
use rand_distr::{Distribution, Poisson};

pub fn choose<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    items.choose(rng).expect("choice set should not be empty")
}

pub fn uniform_int(rng: &mut impl Rng, low: u32, high: u32) -> u32 {
    rng.gen_range(low..=high)
}

// The draw is shifted by lag, so every sample clears that floor.
pub fn poisson(rng: &mut impl Rng, mean: f64, lag: u64) -> u64 {
    let draw: f64 = Poisson::new(mean)
        .expect("poisson mean should be positive")
        .sample(rng);
    lag + draw as u64
}
