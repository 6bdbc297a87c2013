//! Seeded randomness for the demo leaves.
//!
//! Small and deterministic on purpose: a given seed replays the same mission. Not
//! cryptographic.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    /// Uniform-ish value in `0..bound` (`bound` must be non-zero).
    fn next_below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// SplitMix64 generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Independent generator for one named stream of a run.
    pub fn for_stream(seed: u64, stream: &str) -> Self {
        Self::new(derive_seed(seed, stream_id(stream)))
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        mix64(self.state)
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

pub fn derive_seed(seed: u64, stream: u64) -> u64 {
    mix64(seed ^ mix64(stream.wrapping_add(0x9E37_79B9_7F4A_7C15)))
}

/// FNV-1a over the stream name.
fn stream_id(stream: &str) -> u64 {
    stream.bytes().fold(0xCBF2_9CE4_8422_2325, |h, b| {
        (h ^ b as u64).wrapping_mul(0x0000_0100_0000_01B3)
    })
}
