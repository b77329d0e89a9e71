//! Shared helpers for testing the distance kernels: fixed scenario pairs,
//! seeded random inputs, and reference oracles.

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use lv_types::Cost;

/// Full-tableau Wagner-Fischer over code points, the trusted oracle. Two rows
/// of memory, no shortcuts.
pub fn naive_levenshtein(a: &[u32], b: &[u32]) -> Cost {
    let mut prev: Vec<Cost> = (0..=b.len()).collect();
    let mut cur: Vec<Cost> = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            cur[j + 1] = (prev[j] + (ca != cb) as Cost)
                .min(prev[j + 1] + 1)
                .min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Independent byte-string oracle.
pub fn byte_oracle(a: &[u8], b: &[u8]) -> Cost {
    triple_accel::levenshtein_exp(a, b) as Cost
}

/// Fixed-seed generator so failures reproduce.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random sequence of `len` code points drawn from `alphabet` consecutive
/// values starting at `base`. Small alphabets produce plenty of matches,
/// which is where the carry propagation actually gets exercised.
pub fn random_units(rng: &mut impl Rng, len: usize, base: u32, alphabet: u32) -> Vec<u32> {
    (0..len).map(|_| base + rng.gen_range(0..alphabet)).collect()
}

/// Apply `edits` random single-point edits (insert, delete, or replace).
pub fn mutate(rng: &mut impl Rng, seq: &[u32], edits: usize, base: u32, alphabet: u32) -> Vec<u32> {
    let mut out = seq.to_vec();
    for _ in 0..edits {
        let c = base + rng.gen_range(0..alphabet);
        match rng.gen_range(0..3u8) {
            0 if !out.is_empty() => {
                let i = rng.gen_range(0..out.len());
                out.remove(i);
            }
            1 => {
                let i = rng.gen_range(0..=out.len());
                out.insert(i, c);
            }
            _ if !out.is_empty() => {
                let i = rng.gen_range(0..out.len());
                out[i] = c;
            }
            _ => out.push(c),
        }
    }
    out
}

/// Lengths that exercise the kernel boundaries: the short-pattern paths, the
/// single-word limit, and the block seams at multiples of 64.
pub fn interesting_lengths() -> Vec<usize> {
    vec![
        0, 1, 2, 3, 4, 5, 8, 13, 21, 31, 32, 63, 64, 65, 100, 127, 128, 129, 192, 255, 256, 300,
    ]
}

/// All ordered pairs of [`interesting_lengths`].
pub fn length_pairs() -> impl Iterator<Item = (usize, usize)> {
    interesting_lengths()
        .into_iter()
        .cartesian_product(interesting_lengths())
}

/// The scenarios every kernel must satisfy: `(a, b, k, expected)`.
pub fn fixed_cases() -> Vec<(String, String, Option<Cost>, Cost)> {
    vec![
        ("kitten".into(), "sitting".into(), None, 3),
        ("abcde".into(), "abc".into(), None, 2),
        ("abc".into(), "abc".into(), Some(0), 0),
        ("abc".into(), "abd".into(), Some(0), 1),
        (
            "a".repeat(100),
            format!("{}b{}", "a".repeat(50), "a".repeat(49)),
            None,
            1,
        ),
        ("a".repeat(65), format!("{}b", "a".repeat(64)), None, 1),
        ("abcdef".into(), "azced".into(), Some(3), 3),
        ("abcdef".into(), "zzzzzz".into(), Some(3), 4),
        ("".into(), "xyz".into(), None, 3),
        ("日本語".into(), "日本誤".into(), None, 1),
    ]
}

/// Reinterpret as bytes if every code point fits.
pub fn narrow_u8(seq: &[u32]) -> Option<Vec<u8>> {
    seq.iter().map(|&c| u8::try_from(c).ok()).collect()
}

/// Reinterpret as 16-bit units if every code point fits.
pub fn narrow_u16(seq: &[u32]) -> Option<Vec<u16>> {
    seq.iter().map(|&c| u16::try_from(c).ok()).collect()
}
