use super::*;

/// Incremental computation of the top limbs of `w * b`.
///
/// Holds the operands, the product buffer and the scan position together, so every refinement
/// continues the same product.
///
/// ```
/// use limbmul::TopWords;
///
/// let b = [u64::MAX, u64::MAX];
/// let mut out = [0; 3];
/// let mut top = TopWords::new(&mut out, 2, &b).unwrap();
/// assert!(top.refine(1) >= 1);
/// assert_eq!(top.top().last(), Some(&1));
/// assert_eq!(top.finish(), &[u64::MAX - 1, u64::MAX, 1]);
/// ```
#[derive(Debug)]
pub struct TopWords<'a> {
    w: Limb,
    b: &'a [Limb],
    out: &'a mut [Limb],
    cursor: Cursor,
    exact: usize,
}

impl<'a> TopWords<'a> {
    /// Fails with [`MulError::InvalidLength`] if `out` is shorter than `b.len() + 1`. Only the first
    /// `b.len() + 1` limbs of `out` are used.
    pub fn new(out: &'a mut [Limb], w: Limb, b: &'a [Limb]) -> Result<Self, MulError> {
        let expected = b.len() + 1;
        if out.len() < expected {
            return Err(MulError::InvalidLength { expected, actual: out.len() });
        }
        Ok(Self {
            w,
            b,
            out: &mut out[..expected],
            cursor: Cursor::NotStarted,
            exact: 0,
        })
    }

    /// Takes the product buffer from `stack`, see [`math::mul_limb_scratch`].
    #[track_caller]
    pub fn new_in(w: Limb, b: &'a [Limb], stack: &'a mut PodStack) -> (Self, &'a mut PodStack) {
        let (out, stack) = stack.make_raw::<Limb>(b.len() + 1);
        (
            Self {
                w,
                b,
                out,
                cursor: Cursor::NotStarted,
                exact: 0,
            },
            stack,
        )
    }

    /// Makes sure at least `min_exact` top limbs are final, and returns how many are.
    ///
    /// Requests that are already satisfied return immediately.
    pub fn refine(&mut self, min_exact: usize) -> usize {
        let min_exact = Ord::max(min_exact, 1);
        if min_exact <= self.exact {
            return self.exact;
        }

        let exact = mul::resume_kernel(self.out, self.w, self.b, min_exact, &mut self.cursor);
        if self.cursor.is_complete() {
            tracing::trace!(len = self.out.len(), "product complete");
        } else {
            tracing::trace!(requested = min_exact, exact, cursor = ?self.cursor, "top limbs settled early");
        }
        self.exact = exact;
        exact
    }

    /// The limbs known to be final, least significant first. This is a suffix of the product.
    #[inline]
    pub fn top(&self) -> &[Limb] {
        &self.out[self.out.len() - self.exact..]
    }

    /// Completes the product and returns all of it.
    pub fn finish(&mut self) -> &[Limb] {
        self.refine(self.out.len());
        &self.out[..]
    }

    #[inline]
    pub fn exact_words(&self) -> usize {
        self.exact
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.exact == self.out.len()
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}
