//! The Myers'99 bit-parallel kernels. Terminology is as in the paper: the
//! pattern runs vertically in blocks of up to `W` rows, the text horizontally,
//! and per-cell differences of the DP tableau are encoded as +1/-1 indicator
//! bits in word-sized vectors.

use lv_types::{CodePoints, Cost};

use crate::profile::{BlockProfile, PatternProfile};
use crate::{try_vec, DistanceError, B, D, W};

/// One text column of the Myers'99 recurrence over a block of up to `W`
/// pattern rows.
///
/// `pv`/`mv` bit-encode whether the vertical difference at each row is +1 or
/// -1; `ph0`/`mh0` (single bits) are the horizontal difference entering the
/// block at the top. The wrapping add is the carry trick that propagates a
/// horizontal +1 through a run of matching positions in one instruction.
///
/// Returns `ph`/`mh` before the boundary shift: the caller reads the scoring
/// row from them, and bit `W - 1` is the horizontal difference leaving the
/// block at the bottom.
#[inline(always)]
fn advance_column(pv: &mut B, mv: &mut B, ph0: B, mh0: B, eq: B) -> (B, B) {
    let xv = eq | *mv;
    // A -1 entering at the top acts like a match in the first row.
    let eq = eq | mh0;
    let xh = (((eq & *pv).wrapping_add(*pv)) ^ *pv) | eq;
    let ph = *mv | !(xh | *pv);
    let mh = *pv & xh;

    let phs = (ph << 1) | ph0;
    let mhs = (mh << 1) | mh0;
    *pv = mhs | !(xv | phs);
    *mv = phs & xv;
    (ph, mh)
}

/// Distance for patterns of `1..=W` code points, one block, one pass over the
/// text.
pub(crate) fn myers_simple<T: CodePoints, P: PatternProfile>(
    text: T,
    peq: &P,
    vlen: usize,
) -> Cost {
    debug_assert!((1..=W).contains(&vlen));
    let mut pv = B::MAX;
    let mut mv: B = 0;
    let mut score = vlen as D;
    let last: B = 1 << (vlen - 1);

    for i in 0..text.len() {
        let eq = peq.eq(text.get(i));
        // The top row of the tableau is 0, 1, 2, ...: a +1 always enters.
        let (ph, mh) = advance_column(&mut pv, &mut mv, 1, 0, eq);
        score += (ph & last != 0) as D;
        score -= (mh & last != 0) as D;
    }
    score as Cost
}

/// Block-chained distance for non-empty patterns of any length; the
/// dispatcher routes patterns longer than `W` here.
///
/// Each pattern block runs over the entire text. `phc`/`mhc` hold, for every
/// text column, the horizontal difference crossing the boundary into the
/// current block; bit `W - 1` of a column's `ph`/`mh` is the difference
/// leaving the block's bottom row, which replaces the stored carry for the
/// next block. `score` restarts at `len(pattern)` per block because the
/// carries already account for all rows above.
pub(crate) fn myers_block<T: CodePoints, P: CodePoints>(
    text: T,
    pattern: P,
) -> Result<Cost, DistanceError> {
    debug_assert!(!pattern.is_empty());
    let words = text.len().div_ceil(W);
    // The top row of the whole tableau: +1 at every column.
    let mut phc = try_vec(B::MAX, words)?;
    let mut mhc = try_vec(0 as B, words)?;
    let blocks = BlockProfile::build(pattern)?;

    let last: B = 1 << ((pattern.len() - 1) % W);
    let mut score = pattern.len() as D;

    for peq in blocks.iter() {
        let mut pv = B::MAX;
        let mut mv: B = 0;
        score = pattern.len() as D;

        for i in 0..text.len() {
            let eq = peq.eq(text.get(i));
            let pb = (phc[i / W] >> (i % W)) & 1;
            let mb = (mhc[i / W] >> (i % W)) & 1;

            let (ph, mh) = advance_column(&mut pv, &mut mv, pb, mb, eq);

            // `last` only names a live row in the final block; earlier blocks
            // compute a throwaway score that the next block resets.
            score += (ph & last != 0) as D;
            score -= (mh & last != 0) as D;

            if ((ph >> (W - 1)) ^ pb) != 0 {
                phc[i / W] ^= 1 << (i % W);
            }
            if ((mh >> (W - 1)) ^ mb) != 0 {
                mhc[i / W] ^= 1 << (i % W);
            }
        }
    }
    Ok(score as Cost)
}
