use super::*;

/// Exact double width product, returned as `(lo, hi)`.
#[inline(always)]
pub const fn widening_mul(lhs: Limb, rhs: Limb) -> (Limb, Limb) {
    let big = lhs as u128 * rhs as u128;
    (big as Limb, (big >> consts::LIMB_BITS) as Limb)
}

/// `lhs * rhs + carry`, returned as `(lo, hi)`. The sum is at most `Limb::MAX * 2^64`, so it never
/// overflows.
#[inline(always)]
pub const fn carrying_mul(lhs: Limb, rhs: Limb, carry: Limb) -> (Limb, Limb) {
    let big = lhs as u128 * rhs as u128 + carry as u128;
    (big as Limb, (big >> consts::LIMB_BITS) as Limb)
}
