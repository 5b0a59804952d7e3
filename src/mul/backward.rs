use super::*;
use equator::debug_assert;

/// Adds one to `out[0]`, rippling through limbs that wrap to zero. Returns the carry out of the
/// last limb.
#[inline]
fn propagate_carry(out: &mut [Limb]) -> bool {
    for x in out {
        let carry;
        (*x, carry) = x.overflowing_add(consts::LIMB_ONE);
        if !carry {
            return false;
        }
    }
    true
}

/// Writes `w * b[n - 1]` to the two most significant limbs and returns the low half.
#[inline(always)]
fn top_step(out: &mut [Limb], w: Limb, b: &[Limb]) -> Limb {
    let n = b.len();
    (out[n - 1], out[n]) = widening_mul(w, b[n - 1]);
    out[n - 1]
}

/// Writes the low half of `w * b[i]` to `out[i]` and folds the high half into `out[i + 1]`,
/// cascading into the limbs above when that addition wraps. Returns the low half.
#[inline(always)]
fn step(out: &mut [Limb], w: Limb, b: &[Limb], i: usize) -> Limb {
    let (lo, hi) = widening_mul(w, b[i]);
    out[i] = lo;
    let overflow;
    (out[i + 1], overflow) = out[i + 1].overflowing_add(hi);
    if overflow {
        // the partial product is below the full product, which fits in `out`
        let escaped = propagate_carry(&mut out[i + 2..]);
        debug_assert!(!escaped);
    }
    lo
}

/// Whether a carry arriving at a limb currently holding `lo` stays inside that limb.
///
/// Everything below the limb adds up to less than `w` units of it, so the incoming carry is at
/// most `w - 1`. Requires `w != 0`.
#[inline(always)]
fn settles(lo: Limb, w: Limb) -> bool {
    lo.checked_add(w - 1).is_some()
}

/// Processes limbs `start - 1` down to `0`, stopping as soon as `min_exact` limbs at the top of
/// `out` are final. Returns the index of the last processed limb along with the exact count, or
/// `None` if every limb had to be processed.
fn scan(out: &mut [Limb], w: Limb, b: &[Limb], start: usize, min_exact: usize) -> Option<(usize, usize)> {
    let n = b.len();
    for i in (0..start).rev() {
        let lo = step(out, w, b, i);
        if min_exact <= n - i {
            if settles(lo, w) {
                // out[i + 1..=n] can no longer change
                return Some((i, n - i));
            }
            // a carry leaving out[i] is at most one, and stops at out[i + 1] unless it is saturated
            if min_exact < n - i && out[i + 1] != consts::LIMB_MAX {
                return Some((i, n - i - 1));
            }
        }
    }
    None
}

#[inline]
pub fn mul_limb_backward(out: &mut [Limb], w: Limb, b: &[Limb]) {
    debug_assert!(out.len() == b.len() + 1);
    if w == consts::LIMB_ZERO || b.is_empty() {
        out.fill(consts::LIMB_ZERO);
        return;
    }

    let n = b.len();
    top_step(out, w, b);
    for i in (0..n - 1).rev() {
        step(out, w, b, i);
    }
}

pub fn mul_limb_backward_limited(out: &mut [Limb], w: Limb, b: &[Limb], min_exact: usize) -> usize {
    debug_assert!(out.len() == b.len() + 1);
    let n = b.len();
    if w == consts::LIMB_ZERO || n == 0 {
        out.fill(consts::LIMB_ZERO);
        return n + 1;
    }

    let min_exact = min_exact.clamp(1, n + 1);
    let lo = top_step(out, w, b);
    if min_exact <= 1 && settles(lo, w) {
        return 1;
    }
    match scan(out, w, b, n - 1, min_exact) {
        Some((_, exact)) => exact,
        None => n + 1,
    }
}

pub fn mul_limb_backward_resume(out: &mut [Limb], w: Limb, b: &[Limb], min_exact: usize, cursor: &mut Cursor) -> usize {
    debug_assert!(out.len() == b.len() + 1);
    let n = b.len();
    let min_exact = min_exact.clamp(1, n + 1);

    let start = match *cursor {
        Cursor::Complete => return n + 1,
        _ if w == consts::LIMB_ZERO || n == 0 => {
            out.fill(consts::LIMB_ZERO);
            *cursor = Cursor::Complete;
            return n + 1;
        }
        Cursor::NotStarted => {
            let lo = top_step(out, w, b);
            *cursor = Cursor::InProgress(n - 1);
            if min_exact <= 1 && settles(lo, w) {
                return 1;
            }
            n - 1
        }
        Cursor::InProgress(index) => {
            debug_assert!(index < n);
            index
        }
    };

    match scan(out, w, b, start, min_exact) {
        Some((index, exact)) => {
            *cursor = Cursor::InProgress(index);
            exact
        }
        None => {
            *cursor = Cursor::Complete;
            n + 1
        }
    }
}
