use crate::*;
pub use random::*;

mod random;

pub trait RoundGenerator {
    fn generate(self) -> RoundLayout;
}
