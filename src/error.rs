/// Contract violations reported by the public entry points. Nothing is written to the product
/// buffer when one of these is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MulError {
    #[error("the product buffer must hold at least {expected} limbs, got: {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("cursor index {index} is out of range for a {len} limb multiplicand")]
    InvalidCursor { index: usize, len: usize },
}
