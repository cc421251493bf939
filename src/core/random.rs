use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)` for the like decision
pub trait RandomSource {
    fn next_draw(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_draw(&mut self) -> f64 {
        (**self).next_draw()
    }
}

/// Thread-local RNG from `rand`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_draw(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible RNG seeded from configuration
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn next_draw(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when it runs out
#[derive(Debug, Clone)]
pub struct FixedSequence {
    draws: Vec<f64>,
    position: usize,
}

impl FixedSequence {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, position: 0 }
    }

    pub fn constant(draw: f64) -> Self {
        Self::new(vec![draw])
    }

    /// Number of draws taken so far
    pub fn draws_taken(&self) -> usize {
        self.position
    }
}

impl RandomSource for FixedSequence {
    fn next_draw(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let draw = self.draws[self.position % self.draws.len()];
        self.position += 1;
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sequence_cycles() {
        let mut source = FixedSequence::new(vec![0.1, 0.9]);
        assert_eq!(source.next_draw(), 0.1);
        assert_eq!(source.next_draw(), 0.9);
        assert_eq!(source.next_draw(), 0.1);
        assert_eq!(source.draws_taken(), 3);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..10 {
            let draw = a.next_draw();
            assert_eq!(draw, b.next_draw());
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn test_thread_random_in_range() {
        let mut source = ThreadRandom;
        for _ in 0..100 {
            let draw = source.next_draw();
            assert!((0.0..1.0).contains(&draw));
        }
    }
}
