//! Equality vectors ("Peq" in Myers'99): for a pattern window of up to `W`
//! positions, a map from code point to the bitmask of window positions
//! holding it. The inner loops do one lookup per text character, so the
//! tables are built once per call and never touched again.

use lv_types::CodePoints;

use crate::{DistanceError, B, W};

/// Equality-vector lookup for one pattern window.
pub trait PatternProfile {
    /// Bit `j` of the result is set iff window position `j` holds `c`.
    fn eq(&self, c: u32) -> B;
}

/// Dense table for 1-byte code units, indexed directly by the byte value.
pub struct DenseProfile {
    eq: [B; 256],
}

impl DenseProfile {
    pub fn build(pattern: &[u8]) -> Self {
        debug_assert!(pattern.len() <= W);
        let mut eq = [0; 256];
        for (j, &c) in pattern.iter().enumerate() {
            eq[c as usize] |= 1 << j;
        }
        DenseProfile { eq }
    }
}

impl PatternProfile for DenseProfile {
    #[inline(always)]
    fn eq(&self, c: u32) -> B {
        self.eq[c as usize]
    }
}

const SLOTS: usize = 128;

/// Keys carry the high bit so that a zero slot always means "empty" and code
/// point 0 stays representable.
const TAG: u32 = 1 << 31;

/// Open-addressed map for arbitrary code points.
///
/// A window inserts at most `W` distinct keys into `SLOTS` entries, so the
/// table never fills and linear probing always terminates. There is no
/// deletion and no rehashing.
pub struct HashProfile {
    keys: [u32; SLOTS],
    vals: [B; SLOTS],
}

impl HashProfile {
    /// Profile of the window `[start, start + min(W, len - start))`.
    pub fn build<C: CodePoints>(pattern: C, start: usize) -> Self {
        let vlen = (pattern.len() - start).min(W);
        let mut p = HashProfile {
            keys: [0; SLOTS],
            vals: [0; SLOTS],
        };
        for j in 0..vlen {
            p.insert(pattern.get(start + j), 1 << j);
        }
        p
    }

    fn insert(&mut self, c: u32, bit: B) {
        let key = c | TAG;
        let mut h = c as usize % SLOTS;
        while self.keys[h] != 0 && self.keys[h] != key {
            h = (h + 1) % SLOTS;
        }
        self.keys[h] = key;
        self.vals[h] |= bit;
    }
}

impl PatternProfile for HashProfile {
    #[inline(always)]
    fn eq(&self, c: u32) -> B {
        let key = c | TAG;
        let mut h = c as usize % SLOTS;
        while self.keys[h] != 0 {
            if self.keys[h] == key {
                return self.vals[h];
            }
            h = (h + 1) % SLOTS;
        }
        0
    }
}

/// One [`HashProfile`] per `W`-position block of a long pattern.
pub struct BlockProfile {
    blocks: Vec<HashProfile>,
}

impl BlockProfile {
    pub fn build<C: CodePoints>(pattern: C) -> Result<Self, DistanceError> {
        let n = pattern.len().div_ceil(W);
        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(n)
            .map_err(|_| DistanceError::OutOfMemory)?;
        for b in 0..n {
            blocks.push(HashProfile::build(pattern, b * W));
        }
        Ok(BlockProfile { blocks })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HashProfile> {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_and_hash_agree_on_bytes() {
        let pattern = b"mississippi";
        let dense = DenseProfile::build(pattern);
        let hash = HashProfile::build(&pattern[..], 0);
        for c in 0u32..256 {
            assert_eq!(dense.eq(c), hash.eq(c), "c = {c}");
        }
    }

    #[test]
    fn code_point_zero_is_not_confused_with_empty() {
        let pattern: &[u32] = &[0, 1, 0];
        let p = HashProfile::build(pattern, 0);
        assert_eq!(p.eq(0), 0b101);
        assert_eq!(p.eq(1), 0b010);
        assert_eq!(p.eq(2), 0);
    }

    #[test]
    fn colliding_keys_probe_to_free_slots() {
        // All map to the same initial slot (c % 128 == 5).
        let pattern: &[u32] = &[5, 133, 261, 389];
        let p = HashProfile::build(pattern, 0);
        assert_eq!(p.eq(5), 0b0001);
        assert_eq!(p.eq(133), 0b0010);
        assert_eq!(p.eq(261), 0b0100);
        assert_eq!(p.eq(389), 0b1000);
        assert_eq!(p.eq(6), 0);
    }

    #[test]
    fn block_profile_splits_at_word_boundaries() {
        let pattern: Vec<u32> = (0..130).map(|i| (i % 7) as u32).collect();
        let blocks = BlockProfile::build(&pattern[..]).unwrap();
        let blocks: Vec<_> = blocks.iter().collect();
        assert_eq!(blocks.len(), 3);
        // Position 64 lands in bit 0 of the second block.
        assert_eq!(blocks[1].eq(pattern[64]) & 1, 1);
        // The last block holds positions 128 and 129 only.
        for c in 0..7 {
            assert_eq!(blocks[2].eq(c) & !0b11, 0);
        }
    }
}
