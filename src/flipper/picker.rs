use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait IndexPicker {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

#[derive(Debug)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl IndexPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::{IndexPicker, RandomPicker};

    #[test]
    fn picks_stay_in_range() {
        let mut picker = RandomPicker::new(None);
        for len in 1..8 {
            for _ in 0..32 {
                assert!(picker.pick(len) < len);
            }
        }
    }

    #[test]
    fn seeded_pickers_repeat_the_same_sequence() {
        let mut a = RandomPicker::new(Some(42));
        let mut b = RandomPicker::new(Some(42));
        let left: Vec<usize> = (0..16).map(|_| a.pick(4)).collect();
        let right: Vec<usize> = (0..16).map(|_| b.pick(4)).collect();
        assert_eq!(left, right);
    }
}
