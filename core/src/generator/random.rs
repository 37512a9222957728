use super::*;
use alloc::vec::Vec;
use rand::prelude::*;

/// Balanced board shuffled with Fisher–Yates and a uniformly drawn target.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomRoundGenerator {
    seed: u64,
}

impl RandomRoundGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RoundGenerator for RandomRoundGenerator {
    fn generate(self) -> RoundLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut tiles: Vec<Shape> = Shape::ALL
            .iter()
            .flat_map(|&shape| core::iter::repeat_n(shape, COPIES_PER_SHAPE.into()))
            .collect();
        shuffle(&mut tiles, &mut rng);

        let target = Shape::ALL[rng.random_range(0..Shape::ALL.len())];
        log::trace!("generated board for seed {}, target {:?}", self.seed, target);

        RoundLayout::from_tiles(&tiles, target).expect("balanced pool always forms a valid board")
    }
}

/// Walks from the last slot down to 1, swapping each with a uniformly drawn slot in `[0, i]`.
fn shuffle<T>(items: &mut [T], rng: &mut SmallRng) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
