use super::{BYTE_BIAS, CONTINUATION_BIT, GROUP_BITS, GROUP_MASK, Tuple, scale_factor};

/// Encode tuples with the same scheme [`super::decode_floats`] reads.
///
/// Each value is rounded to the nearest step of its dimension's precision.
/// Values past the end of `precisions` are ignored.
///
/// # Examples
/// ```
/// use tabgeo_core::{decode_floats, encode_floats};
///
/// let encoded = encode_floats(&[vec![38.5, -120.2]], &[5, 5]);
/// assert_eq!(encoded, "_p~iF~ps|U");
/// assert_eq!(decode_floats(&encoded, &[5, 5], false), vec![vec![38.5, -120.2]]);
/// ```
#[must_use]
pub fn encode_floats(tuples: &[Tuple], precisions: &[u32]) -> String {
    let factors: Vec<f64> = precisions.iter().copied().map(scale_factor).collect();
    let mut previous = vec![0_i64; precisions.len()];
    let mut encoded = String::new();
    for tuple in tuples {
        for ((value, factor), last) in tuple.iter().zip(&factors).zip(previous.iter_mut()) {
            let scaled = quantise(*value, *factor);
            push_signed(scaled.wrapping_sub(*last), &mut encoded);
            *last = scaled;
        }
    }
    encoded
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::float_arithmetic,
    reason = "scaled coordinates are rounded onto the integer grid; `as` saturates"
)]
fn quantise(value: f64, factor: f64) -> i64 {
    (value * factor).round() as i64
}

fn push_signed(value: i64, out: &mut String) {
    let mut remaining = if value < 0 {
        !(value << 1)
    } else {
        value << 1
    };
    while remaining >= CONTINUATION_BIT {
        push_group((remaining & GROUP_MASK) | CONTINUATION_BIT, out);
        remaining >>= GROUP_BITS;
    }
    push_group(remaining, out);
}

fn push_group(group: i64, out: &mut String) {
    if let Some(ch) = u8::try_from(group + BYTE_BIAS).ok().map(char::from) {
        out.push(ch);
    }
}
