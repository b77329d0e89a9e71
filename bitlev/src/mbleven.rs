//! Bounded kernel for thresholds `k <= 3`.
//!
//! For such small bounds the set of edit scripts that could possibly realise
//! the distance is tiny: at most seven scripts of length `k` whose surplus of
//! deletions over insertions equals the length difference. Each candidate is
//! simulated with a linear two-pointer walk and the minimum cost wins.

use lv_types::{CodePoints, Cost};

/// Advance the text pointer.
const DELETE: u8 = 0b01;
/// Advance the pattern pointer.
const INSERT: u8 = 0b10;
// 0b11 replaces: advance both.

/// Candidate scripts per `(k, len1 - len2)` row, seven columns plus a zero
/// terminator. Two bits per operation, first operation in the low bits. Row
/// base is `(k * (k + 1) / 2 - 1 + diff) * 8`.
#[rustfmt::skip]
pub(crate) static SCRIPTS: [u8; 72] = [
    0x03, 0,    0,    0,    0,    0,    0,    0, // k=1: r | d
    0x01, 0,    0,    0,    0,    0,    0,    0,
    0x0f, 0x09, 0x06, 0,    0,    0,    0,    0, // k=2: rr di id | dr rd | dd
    0x0d, 0x07, 0,    0,    0,    0,    0,    0,
    0x05, 0,    0,    0,    0,    0,    0,    0,
    0x3f, 0x27, 0x2d, 0x39, 0x36, 0x1e, 0x1b, 0, // k=3: rrr rdi dri dir idr ird rid
    0x3d, 0x37, 0x1f, 0x25, 0x19, 0x16, 0,    0, //      drr rdr rrd ddi did idd
    0x35, 0x1d, 0x17, 0,    0,    0,    0,    0, //      ddr drd rdd
    0x15, 0,    0,    0,    0,    0,    0,    0, //      ddd
];

/// Distance bounded by `k in 1..=3`, reported as `k + 1` when exceeded.
///
/// Requires `s1` to be at least as long as `s2` with a length difference of
/// at most `k`; the dispatcher guarantees both.
pub fn mbleven<T: CodePoints, P: CodePoints>(s1: T, s2: P, k: Cost) -> Cost {
    debug_assert!((1..=3).contains(&k));
    debug_assert!(s1.len() >= s2.len() && s1.len() - s2.len() <= k);

    let row = k * (k + 1) / 2 - 1 + (s1.len() - s2.len());
    let mut res = k + 1;
    for &script in &SCRIPTS[row * 8..(row + 1) * 8] {
        if script == 0 {
            break;
        }
        res = res.min(run_script(s1, s2, script));
    }
    res
}

/// Cost of aligning under one candidate script: operations consumed, plus the
/// tails left over once either string runs out. A script that runs dry while
/// the strings still mismatch cannot realise a distance within `k`.
fn run_script<T: CodePoints, P: CodePoints>(s1: T, s2: P, mut script: u8) -> Cost {
    let mut i = 0;
    let mut j = 0;
    let mut cost = 0;
    while i < s1.len() && j < s2.len() {
        if s1.get(i) != s2.get(j) {
            if script == 0 {
                return cost + 1;
            }
            match script & 0b11 {
                DELETE => i += 1,
                INSERT => j += 1,
                _ => {
                    i += 1;
                    j += 1;
                }
            }
            script >>= 2;
            cost += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    cost + (s1.len() - i) + (s2.len() - j)
}
