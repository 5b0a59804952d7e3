use super::*;
use equator::debug_assert;

#[inline]
pub fn mul_limb(out: &mut [Limb], w: Limb, b: &[Limb]) {
    debug_assert!(out.len() == b.len() + 1);
    if w == consts::LIMB_ZERO || b.is_empty() {
        out.fill(consts::LIMB_ZERO);
        return;
    }

    let n = b.len();
    let (lo, mut carry) = widening_mul(w, b[0]);
    out[0] = lo;
    for (dst, &x) in core::iter::zip(&mut out[1..n], &b[1..]) {
        (*dst, carry) = carrying_mul(w, x, carry);
    }
    out[n] = carry;
}
