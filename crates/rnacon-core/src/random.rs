//! Uniform index selection for codon and amino acid choices.

use rand::rngs::OsRng;
use rand::Rng;

/// Source of uniform indices in `0..len`.
pub trait IndexSource {
    /// `len` is always greater than zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: IndexSource + ?Sized> IndexSource for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Draws from the operating system's secure random source. Not seedable,
/// so repeated runs never share a codon bias.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureIndexSource;

impl IndexSource for SecureIndexSource {
    fn pick(&mut self, len: usize) -> usize {
        OsRng.gen_range(0..len)
    }
}

/// Choose one element. Single-element and empty slices never consult `source`.
pub fn choose<'a, T, R: IndexSource + ?Sized>(source: &mut R, items: &'a [T]) -> Option<&'a T> {
    match items.len() {
        0 => None,
        1 => items.first(),
        len => {
            let idx = source.pick(len);
            log::trace!("picked index {idx} of {len}");
            items.get(idx)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::IndexSource;

    /// Replays a fixed list of indices, then repeats the last one.
    pub struct ScriptedIndices {
        script: Vec<usize>,
        pos: usize,
        pub calls: usize,
    }

    impl ScriptedIndices {
        pub fn new(script: Vec<usize>) -> Self {
            Self {
                script,
                pos: 0,
                calls: 0,
            }
        }
    }

    impl IndexSource for ScriptedIndices {
        fn pick(&mut self, len: usize) -> usize {
            self.calls += 1;
            let idx = self.script.get(self.pos).or(self.script.last()).copied().unwrap_or(0);
            self.pos += 1;
            idx % len
        }
    }
}
