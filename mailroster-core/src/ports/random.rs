//! Randomness port - source of unpredictable picks for credential generation

/// Source of uniformly distributed indices
///
/// Production code must back this with a cryptographically secure generator,
/// since its output ends up in passwords. Tests substitute a seeded or
/// scripted source to assert exact generated output.
pub trait RandomSource {
    /// Return a uniformly chosen value in `0..bound`
    ///
    /// `bound` is always greater than zero.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}
