//! Compressed coordinate strings.
//!
//! Coordinates are stored as printable ASCII using the polyline scheme
//! generalised to N dimensions: every value is a zig-zag signed delta split
//! into 5-bit groups, each group biased by 63, with bit `0x20` marking that
//! another group follows. A tuple interleaves one value per dimension, and
//! each dimension keeps its own running total for the whole string.
//!
//! ```text
//! "_p~iF~ps|U"  --[5, 5]-->  [[38.5, -120.2]]
//! ```
//!
//! Decoding never fails. Truncated input ends decoding and tuples that fail
//! lon/lat validation are dropped and reported through a callback or the
//! `log` facade.

mod cache;
mod decode;
mod encode;

pub use cache::{DecodeCache, decode_floats_with_cache};
pub use decode::{RejectedTuple, TupleRejection, decode_floats, decode_floats_inspect};
pub use encode::encode_floats;

/// One decoded N-dimensional value, in declared dimension order.
pub type Tuple = Vec<f64>;

/// Bias added to every 5-bit group to keep the output printable.
const BYTE_BIAS: i64 = 63;

/// Marks that another group of the same value follows.
const CONTINUATION_BIT: i64 = 0x20;

/// Payload bits carried by one group.
const GROUP_MASK: i64 = 0x1f;

/// Bits contributed by each group.
const GROUP_BITS: u32 = 5;

/// Return `10^precision` as the divisor for one dimension.
fn scale_factor(precision: u32) -> f64 {
    10_f64.powi(i32::try_from(precision).unwrap_or(i32::MAX))
}
