use super::*;

mod backward;
mod forward;

pub(crate) use backward::mul_limb_backward_resume as resume_kernel;

/// Returns the first `b.len() + 1` limbs of `out`, the part every kernel writes to.
#[inline]
fn product_mut<'a>(out: &'a mut [Limb], b: &[Limb]) -> Result<&'a mut [Limb], MulError> {
    let expected = b.len() + 1;
    if out.len() < expected {
        return Err(MulError::InvalidLength { expected, actual: out.len() });
    }
    Ok(&mut out[..expected])
}

#[inline]
pub fn mul_limb_scratch(len: usize) -> Result<StackReq, SizeOverflow> {
    StackReq::try_new::<Limb>(len.checked_add(1).ok_or(SizeOverflow)?)
}

#[inline]
pub fn mul_limb(out: &mut [Limb], w: Limb, b: &[Limb]) -> Result<(), MulError> {
    forward::mul_limb(product_mut(out, b)?, w, b);
    Ok(())
}

#[inline]
pub fn mul_limb_backward(out: &mut [Limb], w: Limb, b: &[Limb]) -> Result<(), MulError> {
    backward::mul_limb_backward(product_mut(out, b)?, w, b);
    Ok(())
}

/// `min_exact` is clamped to `1..=b.len() + 1`. Limbs of `out` below the returned count may hold
/// partial results.
#[inline]
pub fn mul_limb_backward_limited(out: &mut [Limb], w: Limb, b: &[Limb], min_exact: usize) -> Result<usize, MulError> {
    Ok(backward::mul_limb_backward_limited(product_mut(out, b)?, w, b, min_exact))
}

/// `cursor` must either be [`Cursor::NotStarted`], or come from a previous call with the same `w`,
/// `b` and `out`. Reusing it with other operands is not detected and gives meaningless results,
/// [`TopWords`] rules this out by holding all of them together.
pub fn mul_limb_backward_resume(
    out: &mut [Limb],
    w: Limb,
    b: &[Limb],
    min_exact: usize,
    cursor: &mut Cursor,
) -> Result<usize, MulError> {
    let out = product_mut(out, b)?;
    if let Cursor::InProgress(index) = *cursor {
        if index >= b.len() {
            return Err(MulError::InvalidCursor { index, len: b.len() });
        }
    }
    Ok(backward::mul_limb_backward_resume(out, w, b, min_exact, cursor))
}
