use rand::Rng;
use rand::rngs::StdRng;

/// Source of uniform samples in `[0, 1)`.
///
/// The walk draws from this instead of a global RNG so callers can seed it
/// (`StdRng`) or script it exactly (`ScriptedRandom`).
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for StdRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Largest value a sample can take.
    const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        if v.is_nan() {
            0.0
        } else {
            v.clamp(0.0, Self::MAX_UNIT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn scripted_cycles_and_clamps() {
        let mut r = ScriptedRandom::new([0.25, 1.5, -1.0]);
        assert_eq!(r.next_unit(), 0.25);
        assert!(r.next_unit() < 1.0);
        assert_eq!(r.next_unit(), 0.0);
        assert_eq!(r.next_unit(), 0.25);
        assert_eq!(r.draws(), 4);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut r = ScriptedRandom::default();
        assert_eq!(r.next_unit(), 0.0);
        assert_eq!(r.draws(), 1);
    }

    #[test]
    fn std_rng_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_samples() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let xs: Vec<f64> = (0..16).map(|_| a.next_unit()).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.next_unit()).collect();
        assert_eq!(xs, ys);
    }
}
