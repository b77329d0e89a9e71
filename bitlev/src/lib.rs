//! Levenshtein distances via Myers' bit-parallel algorithm.
//!
//! The entry point is [`distance`]: it normalises the argument order, applies
//! the cheap early exits an optional bound allows, and routes to one of three
//! kernels:
//!
//! - [`mbleven`] for bounds `k <= 3`, which simulates the handful of edit
//!   scripts that could realise such a small distance;
//! - the Myers'99 bit-parallel kernel for everything else, single-block for
//!   patterns of up to 64 code points and block-chained beyond that, with a
//!   dense equality table on the all-bytes fast path;
//! - [`wagner_fischer`], the banded reference tableau, kept public as the
//!   kernel the fast paths are checked against.
//!
//! ```
//! use bitlev::{distance, levenshtein, levenshtein_bounded, Units};
//!
//! assert_eq!(levenshtein("kitten", "sitting").unwrap(), 3);
//! // Any distance above the bound reports as bound + 1.
//! assert_eq!(levenshtein_bounded("abcdef", "zzzzzz", 3).unwrap(), 4);
//! assert_eq!(distance(Units::U8(b"abcde"), Units::U8(b"abc"), None).unwrap(), 2);
//! ```

mod mbleven;
mod myers;
mod profile;
mod wagner_fischer;


use std::fmt;

pub use lv_types::{CodePoints, Cost, Units};

pub use mbleven::mbleven;
pub use wagner_fischer::wagner_fischer;

use profile::{DenseProfile, HashProfile};

/// Bitvector word of the Myers kernels.
pub(crate) type B = u64;
/// Bits per word, and the pattern block height.
pub(crate) const W: usize = B::BITS as usize;
/// Signed running scores and differences.
pub(crate) type D = i64;

const DEBUG: bool = false;

/// Errors surfaced by the distance routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DistanceError {
    /// A per-call scratch buffer could not be allocated.
    OutOfMemory,
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceError::OutOfMemory => write!(f, "out of memory allocating scratch buffers"),
        }
    }
}

impl std::error::Error for DistanceError {}

/// Fallible counterpart of `vec![v; n]` for per-call scratch buffers.
pub(crate) fn try_vec<T: Clone>(v: T, n: usize) -> Result<Vec<T>, DistanceError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(n)
        .map_err(|_| DistanceError::OutOfMemory)?;
    buf.resize(n, v);
    Ok(buf)
}

/// Levenshtein distance between two strings.
///
/// ASCII inputs are compared as byte slices without copying; anything else is
/// decoded to one `u32` per code point first.
pub fn levenshtein(a: &str, b: &str) -> Result<Cost, DistanceError> {
    str_distance(a, b, None)
}

/// Bounded Levenshtein distance: the result is exact when it is at most `k`,
/// and reported as `k + 1` otherwise.
pub fn levenshtein_bounded(a: &str, b: &str, k: Cost) -> Result<Cost, DistanceError> {
    str_distance(a, b, Some(k))
}

fn str_distance(a: &str, b: &str, k: Option<Cost>) -> Result<Cost, DistanceError> {
    if a.is_ascii() && b.is_ascii() {
        return distance(Units::U8(a.as_bytes()), Units::U8(b.as_bytes()), k);
    }
    let a = decode(a)?;
    let b = decode(b)?;
    distance(Units::U32(&a), Units::U32(&b), k)
}

fn decode(s: &str) -> Result<Vec<u32>, DistanceError> {
    let mut out = Vec::new();
    // One char per byte is the upper bound.
    out.try_reserve_exact(s.len())
        .map_err(|_| DistanceError::OutOfMemory)?;
    out.extend(s.chars().map(|c| c as u32));
    Ok(out)
}

/// Levenshtein distance between two code-point sequences, optionally bounded.
///
/// With `k: None` the true distance is returned. With `Some(k)` the result is
/// the true distance whenever that is at most `k`, and `k + 1` otherwise;
/// `Some(0)` is a pure equality test. The argument order never affects the
/// result.
pub fn distance(a: Units, b: Units, k: Option<Cost>) -> Result<Cost, DistanceError> {
    // The longer string is the text, the shorter one the pattern; every
    // kernel relies on this.
    let (mut s1, mut s2) = (a, b);
    if s1.len() < s2.len() {
        std::mem::swap(&mut s1, &mut s2);
    }

    if let Some(k) = k {
        // d(s1, s2) >= len1 - len2, so a bound below that is already exceeded.
        if k < s1.len() - s2.len() {
            return Ok(k + 1);
        }
        if k == 0 {
            return Ok(!units_eq(s1, s2) as Cost);
        }
    }
    if s2.is_empty() {
        return Ok(s1.len());
    }

    let res = match k {
        Some(k @ 1..=3) => {
            if DEBUG {
                eprintln!("kernel: mbleven, k = {k}");
            }
            mbleven(s1, s2, k)
        }
        _ => myers_distance(s1, s2)?,
    };
    Ok(match k {
        Some(k) if k < res => k + 1,
        _ => res,
    })
}

/// Route to the right Myers kernel; `s1` is the longer string, `s2` is
/// non-empty.
fn myers_distance(s1: Units, s2: Units) -> Result<Cost, DistanceError> {
    if s2.len() > W {
        if DEBUG {
            eprintln!("kernel: myers block, pattern length {}", s2.len());
        }
        return myers::myers_block(s1, s2);
    }
    if let (Units::U8(text), Units::U8(pattern)) = (s1, s2) {
        if DEBUG {
            eprintln!("kernel: myers simple, dense bytes");
        }
        let peq = DenseProfile::build(pattern);
        return Ok(myers::myers_simple(text, &peq, pattern.len()));
    }
    if DEBUG {
        eprintln!("kernel: myers simple, hashed code points");
    }
    let peq = HashProfile::build(s2, 0);
    Ok(myers::myers_simple(s1, &peq, s2.len()))
}

fn units_eq(a: Units, b: Units) -> bool {
    a.len() == b.len() && (0..a.len()).all(|i| a.get(i) == b.get(i))
}
