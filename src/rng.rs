use crate::bounds::BoundingBox;
use rand::{Rng, RngCore, SeedableRng};

/// Seed used when no seed is given.
pub const DEFAULT_SEED: u32 = 2463534242;

/// A small xorshift generator used to pick median samples during tree construction.
///
/// Not cryptographically secure. Its only contract is that the same seed and the
/// same call sequence always produce the same values, which keeps tree shapes
/// reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self { state: DEFAULT_SEED }
    }
}

impl Xorshift32 {
    /// Creates a generator from `seed`. Zero is the absorbing state of xorshift
    /// and is mapped to 1.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    #[inline]
    fn step(&mut self) -> u32 {
        let mut y = self.state;
        y ^= y << 13;
        y ^= y >> 17;
        y ^= y << 5;
        self.state = y;
        y
    }

    /// Next value in `0..=0x7FFF_FFFF`.
    #[inline]
    pub fn next_u31(&mut self) -> u32 {
        self.step() & 0x7FFF_FFFF
    }

    /// Uniform value in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.next_u31() as f64 / 2147483648.0
    }

    /// Uniform value in `[a, b)`.
    pub fn uniform_in(&mut self, a: f64, b: f64) -> f64 {
        a + (b - a) * self.uniform()
    }
}

impl RngCore for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.step() as u64;
        let hi = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xorshift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Draws `count` points uniformly inside `bounds`.
pub fn random_points<R: Rng, const D: usize>(rng: &mut R, bounds: &BoundingBox<D>, count: usize) -> Vec<[f64; D]> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(std::array::from_fn(|i| {
            bounds.min[i] + rng.r#gen::<f64>() * bounds.extent(i)
        }));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_draws_from_default_seed() {
        let mut rng = Xorshift32::default();

        let mut y = DEFAULT_SEED;
        for _ in 0..4 {
            y ^= y << 13;
            y ^= y >> 17;
            y ^= y << 5;
            assert_eq!(rng.next_u31(), y & 0x7FFF_FFFF);
        }
    }

    #[test]
    fn test_zero_seed_is_clamped() {
        let mut zero = Xorshift32::new(0);
        let mut one = Xorshift32::new(1);
        for _ in 0..16 {
            let v = zero.next_u31();
            assert_eq!(v, one.next_u31());
        }
        assert_ne!(Xorshift32::new(0).next_u32(), 0);
    }

    #[test]
    fn test_uniform_ranges() {
        let mut rng = Xorshift32::new(7);
        for _ in 0..10_000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u));
            let v = rng.uniform_in(-300.0, 300.0);
            assert!((-300.0..300.0).contains(&v));
        }
    }

    #[test]
    fn test_seedable_matches_new() {
        let mut a = Xorshift32::from_seed(42u32.to_le_bytes());
        let mut b = Xorshift32::new(42);
        assert_eq!(a.next_u64(), b.next_u64());

        let mut bytes = [0u8; 7];
        a.fill_bytes(&mut bytes);
        let mut expected = [0u8; 8];
        expected[..4].copy_from_slice(&b.next_u32().to_le_bytes());
        expected[4..].copy_from_slice(&b.next_u32().to_le_bytes());
        assert_eq!(bytes, expected[..7]);
    }

    #[test]
    fn test_random_points_inside_bounds() {
        let bounds = BoundingBox::new([-1.0, 0.0, 10.0], [1.0, 5.0, 20.0]);
        let mut rng = Xorshift32::new(3);
        let points = random_points(&mut rng, &bounds, 500);
        assert_eq!(points.len(), 500);
        assert!(points.iter().all(|p| bounds.contains(p)));
    }
}
