//! Mersenne Twister engines with the classic parameter sets.
//!
//! [`Mt19937`] and [`Mt19937_64`] are the standard 32- and 64-bit
//! generators, bit-exact against the reference implementations. Both expose
//! the word-level generator directly ([`Mt19937::next_word`]) and implement
//! [`RngCore`] and [`SeedableRng`], so anything written against `rand_core`
//! can consume them.
//!
//! These engines are deterministic value sources for tests, benchmarks and
//! reproducible simulations. They are not cryptographically secure.
//!
//! ```
//! use twistx::Mt19937;
//!
//! let mut rng = Mt19937::default();
//! assert_eq!(rng.next_word(), 3_499_211_612);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(unreachable_pub)]

use rand_core::{impls, RngCore, SeedableRng};

/// Expands one Mersenne Twister engine from its parameter set.
///
/// Parameters follow the reference naming: `w` word bits, `n` state words,
/// `m` middle offset, `r` split point, `a` twist coefficients, `u`/`d`,
/// `s`/`b`, `t`/`c`, `l` tempering constants and `f` the seeding
/// multiplier.
macro_rules! mersenne_twister {
    (
        $(#[$attr:meta])*
        $name:ident: $word:ty,
        w = $w:expr, n = $n:expr, m = $m:expr, r = $r:expr,
        a = $a:expr, u = $u:expr, d = $d:expr, s = $s:expr,
        b = $b:expr, t = $t:expr, c = $c:expr, l = $l:expr,
        f = $f:expr, default_seed = $default_seed:expr,
    ) => {
        $(#[$attr])*
        #[derive(Clone)]
        pub struct $name {
            /// Twisted state words.
            state: [$word; $n],
            /// Next state word to temper; `n` means a twist is due.
            cursor: usize,
        }

        impl $name {
            /// State words per twist.
            const N: usize = $n;
            /// Middle word offset fed into the twist.
            const M: usize = $m;
            /// Twist matrix coefficients.
            const A: $word = $a;
            /// Mask of the `r` low bits.
            const LOWER: $word = (1 << $r) - 1;
            /// Mask of the remaining high bits.
            const UPPER: $word = !Self::LOWER;
            /// Seeding multiplier.
            const F: $word = $f;

            /// An engine seeded with an explicit word.
            pub fn new(seed: $word) -> Self {
                let mut state = [0; $n];
                state[0] = seed;
                let mut i = 1;
                while i < $n {
                    let prev = state[i - 1];
                    state[i] = Self::F
                        .wrapping_mul(prev ^ (prev >> ($w - 2)))
                        .wrapping_add(i as $word);
                    i += 1;
                }
                let mut engine = Self { state, cursor: 0 };
                engine.twist();
                engine
            }

            /// Advances the whole state by one twist and restarts
            /// tempering at word zero.
            fn twist(&mut self) {
                for i in 0..Self::N {
                    let mixed = (self.state[i] & Self::UPPER)
                        | (self.state[(i + 1) % Self::N] & Self::LOWER);
                    let mut twisted = mixed >> 1;
                    if mixed & 1 != 0 {
                        twisted ^= Self::A;
                    }
                    self.state[i] = self.state[(i + Self::M) % Self::N] ^ twisted;
                }
                self.cursor = 0;
            }

            /// Produces the next tempered word of the sequence.
            #[inline]
            pub fn next_word(&mut self) -> $word {
                if self.cursor == Self::N {
                    self.twist();
                }
                let mut word = self.state[self.cursor];
                self.cursor += 1;
                word ^= (word >> $u) & $d;
                word ^= (word << $s) & $b;
                word ^= (word << $t) & $c;
                word ^= word >> $l;
                word
            }
        }

        impl Default for $name {
            /// An engine seeded with the reference default seed.
            fn default() -> Self {
                Self::new($default_seed)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("cursor", &self.cursor)
                    .finish_non_exhaustive()
            }
        }
    };
}

mersenne_twister! {
    /// The standard 32-bit MT19937 engine.
    Mt19937: u32,
    w = 32, n = 624, m = 397, r = 31,
    a = 0x9908_b0df, u = 11, d = 0xffff_ffff, s = 7,
    b = 0x9d2c_5680, t = 15, c = 0xefc6_0000, l = 18,
    f = 1_812_433_253, default_seed = 5489,
}

mersenne_twister! {
    /// The standard 64-bit MT19937-64 engine.
    Mt19937_64: u64,
    w = 64, n = 312, m = 156, r = 31,
    a = 0xb502_6f5a_a966_19e9, u = 29, d = 0x5555_5555_5555_5555, s = 17,
    b = 0x71d6_7fff_eda6_0000, t = 37, c = 0xfff7_eee0_0000_0000, l = 43,
    f = 6_364_136_223_846_793_005, default_seed = 5489,
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    /// Seeds from four little-endian bytes.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

impl RngCore for Mt19937_64 {
    /// A 32-bit value from the low half of the next 64-bit word.
    fn next_u32(&mut self) -> u32 {
        self.next_word() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for Mt19937_64 {
    type Seed = [u8; 8];

    /// Seeds from eight little-endian bytes.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mt19937_matches_the_reference_sequence() {
        let mut rng = Mt19937::default();
        assert_eq!(rng.next_word(), 3_499_211_612);

        let mut rng = Mt19937::default();
        let mut last = 0;
        for _ in 0..10_000 {
            last = rng.next_word();
        }
        assert_eq!(last, 4_123_659_995);
    }

    #[test]
    fn mt19937_64_matches_the_reference_sequence() {
        let mut rng = Mt19937_64::default();
        assert_eq!(rng.next_word(), 14_514_284_786_278_117_030);

        let mut rng = Mt19937_64::default();
        let mut last = 0;
        for _ in 0..10_000 {
            last = rng.next_word();
        }
        assert_eq!(last, 9_981_545_732_273_789_042);
    }

    #[test]
    fn seeding_from_bytes_matches_seeding_from_words() {
        let mut from_word = Mt19937::new(5489);
        let mut from_bytes = Mt19937::from_seed(5489u32.to_le_bytes());
        for _ in 0..16 {
            assert_eq!(from_word.next_word(), from_bytes.next_word());
        }

        let mut from_word = Mt19937_64::new(0xdead_beef);
        let mut from_bytes = Mt19937_64::from_seed(0xdead_beefu64.to_le_bytes());
        for _ in 0..16 {
            assert_eq!(from_word.next_word(), from_bytes.next_word());
        }
    }

    #[test]
    fn extreme_seeds_still_mix() {
        let mut zero = Mt19937::new(0);
        let mut max = Mt19937::new(u32::MAX);
        let first_zero = zero.next_word();
        let first_max = max.next_word();
        assert_ne!(first_zero, 0);
        assert_ne!(first_zero, first_max);
        assert_ne!(zero.next_word(), first_zero);
    }

    #[test]
    fn fill_bytes_agrees_with_the_word_stream() {
        let mut words = Mt19937::default();
        let low = words.next_u32();
        let high = words.next_u32();
        let mut expected = [0u8; 8];
        expected[..4].copy_from_slice(&low.to_le_bytes());
        expected[4..].copy_from_slice(&high.to_le_bytes());

        let mut bytes = [0u8; 8];
        Mt19937::default().fill_bytes(&mut bytes);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn streams_with_different_seeds_diverge() {
        let mut a = Mt19937_64::new(1);
        let mut b = Mt19937_64::new(2);
        assert_ne!(a.next_word(), b.next_word());
    }
}
