use thiserror::Error;

/// Rejection of a raw range that is not a pair of finite numbers.
///
/// The range list is left unchanged whenever this is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BadInput {
    #[error("bad input: expected a pair [x, y], got {len} value(s)")]
    Arity { len: usize },

    #[error("bad input: bounds must be finite numbers")]
    NonFinite,

    #[error("bad input: bounds must fit in a 64-bit signed integer")]
    OutOfRange,
}
