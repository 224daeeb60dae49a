use rand::{rngs::SmallRng, SeedableRng};

/// Owned randomness for exploration, seeded for reproducible runs.
#[derive(Debug, Clone)]
pub struct MaybeSeededRng {
    pub seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeded_is_reproducible() {
        let mut a = MaybeSeededRng::new(Some(1234));
        let mut b = MaybeSeededRng::new(Some(1234));

        let xs: Vec<u64> = (0..8).map(|_| a.get_rng().random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.get_rng().random()).collect();
        assert_eq!(xs, ys);
    }
}
