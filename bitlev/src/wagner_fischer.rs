//! Row-major Wagner-Fischer with a diagonal cutoff. Kept as the reference
//! kernel: slower than the bit-parallel paths but easy to read, and the
//! differential partner the Myers kernels are tested against.
//!
//! Cells far from the main diagonal can never lie on an optimal path, so each
//! row only fills a band of width about `len(s1) - len(s2) + 1` around it.
//! Patterns of length 0, 1 and 2 skip the tableau entirely.

use lv_types::{CodePoints, Cost, Units};

use crate::{try_vec, DistanceError};

/// Position of the first occurrence of `c` in `s` at or after `start`.
fn find<C: CodePoints>(s: C, c: u32, start: usize) -> Option<usize> {
    (start..s.len()).find(|&i| s.get(i) == c)
}

/// One-point pattern: everything is a deletion except a single match.
fn distance_l1<T: CodePoints, P: CodePoints>(s1: T, s2: P) -> Cost {
    s1.len() - find(s1, s2.get(0), 0).is_some() as Cost
}

/// Two-point pattern: match both code points in order if possible, else fall
/// back to matching the second one alone.
fn distance_l2<T: CodePoints, P: CodePoints>(s1: T, s2: P) -> Cost {
    let c0 = s2.get(0);
    let c1 = s2.get(1);
    match find(s1, c0, 0) {
        Some(i0) if i0 + 1 < s1.len() => s1.len() - find(s1, c1, i0 + 1).is_some() as Cost - 1,
        _ => s1.len() - find(s1, c1, 1).is_some() as Cost,
    }
}

/// The banded tableau for patterns of three or more code points. `s1` must be
/// the longer string.
fn distance_banded<T: CodePoints, P: CodePoints>(s1: T, s2: P) -> Result<Cost, DistanceError> {
    let len1 = s1.len();
    let len2 = s2.len();
    let rpad = (len2 - 1) / 2;
    let lpad = rpad + (len1 - len2);

    let mut arr = try_vec(0 as Cost, len2 + 1)?;
    // Cells left of the band are never read; the first rows only need the
    // seeded prefix.
    for (j, cell) in arr.iter_mut().enumerate().take(rpad + 1) {
        *cell = j;
    }

    for i in 1..=len1 {
        // Western sentinel for rows whose band touches the first column.
        arr[0] = i - 1;
        let chr = s1.get(i - 1);

        let start = i.saturating_sub(lpad).max(1);
        let mut dia = arr[start - 1];
        let mut top = arr[start];

        if chr != s2.get(start - 1) {
            dia = dia.min(top) + 1;
        }
        arr[start] = dia;
        let mut left = dia;
        dia = top;

        // Cells with both their top and left neighbours inside the band.
        let end = if len2 < i + rpad { len2 } else { i + rpad - 1 };
        for j in start + 1..=end {
            top = arr[j];
            if chr != s2.get(j - 1) {
                dia = dia.min(top).min(left) + 1;
            }
            arr[j] = dia;
            left = dia;
            dia = top;
        }

        if len2 < i + rpad {
            continue;
        }

        // Trailing cell on the band's right edge: the cell above it lies
        // outside the band, so only the left and diagonal neighbours count.
        if chr != s2.get(end) {
            dia = dia.min(left) + 1;
        }
        arr[end + 1] = dia;
    }
    Ok(arr[len2])
}

/// Levenshtein distance by banded Wagner-Fischer. Argument order is
/// immaterial; allocation failure for the row buffer is the only error.
pub fn wagner_fischer(a: Units, b: Units) -> Result<Cost, DistanceError> {
    let (mut s1, mut s2) = (a, b);
    if s1.len() < s2.len() {
        std::mem::swap(&mut s1, &mut s2);
    }
    match s2.len() {
        0 => Ok(s1.len()),
        1 => Ok(distance_l1(s1, s2)),
        2 => Ok(distance_l2(s1, s2)),
        _ => distance_banded(s1, s2),
    }
}
