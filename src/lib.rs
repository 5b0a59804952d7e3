//! Multiplication of a multiprecision integer by a single limb.
//!
//! Besides the usual least significant first product, the kernels here can run from the most
//! significant limb downwards and stop as soon as a requested number of top limbs can no longer be
//! affected by the carries of the limbs that have not been processed yet. This is what base
//! conversion and digit extraction want: the top limbs of `w * b`, without paying for the rest.
//!
//! All kernels write into caller provided memory and never allocate.

use dyn_stack::{PodStack, SizeOverflow, StackReq};

mod error;
pub use error::MulError;

mod wide;

mod mul;

mod session;
pub use session::TopWords;

pub type Limb = u64;

pub mod math {
    use super::*;

    pub use wide::{carrying_mul, widening_mul};

    /// Scratch space needed by [`TopWords::new_in`] for a multiplicand of `len` limbs, or
    /// [`SizeOverflow`] if it does not fit in `usize`.
    pub use mul::mul_limb_scratch;

    /// Computes `out[..=n] = w * b`, least significant limb first.
    pub use mul::mul_limb;

    /// Computes `out[..=n] = w * b`, most significant limb first.
    pub use mul::mul_limb_backward;

    /// Computes the top limbs of `w * b`, stopping once at least `min_exact` of them are final.
    /// Returns how many top limbs of `out` are exact.
    pub use mul::mul_limb_backward_limited;

    /// Like [`mul_limb_backward_limited`], but picks up where the previous call on the same
    /// `cursor` stopped.
    pub use mul::mul_limb_backward_resume;
}

pub use math::*;

/// Scan position of a resumable backward multiplication.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    /// Nothing has been written yet.
    #[default]
    NotStarted,
    /// Limbs `index..=n` of the product have been written, `index - 1` is the next one to process.
    InProgress(usize),
    /// The whole product has been written.
    Complete,
}

impl Cursor {
    #[inline]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

pub mod consts {
    use crate::Limb;

    pub const LIMB_ZERO: Limb = 0;
    pub const LIMB_ONE: Limb = 1;
    pub const LIMB_MAX: Limb = Limb::MAX;
    pub const LIMB_BITS: u32 = Limb::BITS;
}
