use log::warn;
use thiserror::Error;

use super::{BYTE_BIAS, CONTINUATION_BIT, GROUP_BITS, GROUP_MASK, Tuple, scale_factor};
use crate::{valid_latitude, valid_longitude};

/// Why a decoded tuple was dropped by lon/lat validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TupleRejection {
    /// Dimension 0 was not a finite value in `[-180, 180]`.
    #[error("invalid longitude {0}")]
    Longitude(f64),
    /// Dimension 1 was not a finite value in `[-90, 90]`.
    #[error("invalid latitude {0}")]
    Latitude(f64),
}

/// A tuple dropped during decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedTuple {
    /// Position of the tuple in the encoded stream, counting dropped tuples.
    pub index: usize,
    /// The decoded values.
    pub values: Tuple,
    /// Which check failed.
    pub reason: TupleRejection,
}

/// Decode `encoded` into tuples with one value per entry of `precisions`.
///
/// Dropped tuples are logged at `warn` level.
///
/// # Examples
/// ```
/// use tabgeo_core::decode_floats;
///
/// let tuples = decode_floats("_p~iF~ps|U_ulLnnqC", &[5, 5], false);
/// assert_eq!(tuples, vec![vec![38.5, -120.2], vec![40.7, -120.95]]);
/// ```
#[must_use]
pub fn decode_floats(encoded: &str, precisions: &[u32], check_lon_lat: bool) -> Vec<Tuple> {
    decode_floats_inspect(encoded, precisions, check_lon_lat, |rejected| {
        warn!(
            "Dropped decoded tuple {} {:?}: {}",
            rejected.index, rejected.values, rejected.reason
        );
    })
}

/// Decode `encoded`, handing every tuple dropped by validation to
/// `on_rejected`.
///
/// When `check_lon_lat` is set and there are at least two dimensions,
/// dimension 0 is checked as a longitude and dimension 1 as a latitude.
/// Dropped tuples still advance the running totals.
///
/// # Examples
/// ```
/// use tabgeo_core::decode_floats_inspect;
///
/// let mut rejected = Vec::new();
/// // Latitude/longitude order, so the longitude check sees 38.5 and the
/// // latitude check sees -120.2.
/// let tuples = decode_floats_inspect("_p~iF~ps|U", &[5, 5], true, |tuple| {
///     rejected.push(tuple);
/// });
/// assert!(tuples.is_empty());
/// assert_eq!(rejected.len(), 1);
/// ```
pub fn decode_floats_inspect<F>(
    encoded: &str,
    precisions: &[u32],
    check_lon_lat: bool,
    mut on_rejected: F,
) -> Vec<Tuple>
where
    F: FnMut(RejectedTuple),
{
    let mut decoded = Vec::new();
    if precisions.is_empty() {
        return decoded;
    }
    let factors: Vec<f64> = precisions.iter().copied().map(scale_factor).collect();
    let mut totals = vec![0_i64; precisions.len()];
    let mut groups = GroupReader::new(encoded.as_bytes());
    let mut index = 0_usize;

    'tuples: while !groups.is_exhausted() {
        for total in &mut totals {
            // A tuple cut short by the end of input is discarded.
            let Some(delta) = groups.next_value() else {
                break 'tuples;
            };
            *total = total.wrapping_add(delta);
        }
        let values: Tuple = totals
            .iter()
            .zip(&factors)
            .map(|(total, factor)| scale(*total, *factor))
            .collect();
        let tuple_index = index;
        index = index.saturating_add(1);

        if check_lon_lat && let Some(reason) = lon_lat_violation(&values) {
            on_rejected(RejectedTuple {
                index: tuple_index,
                values,
                reason,
            });
            continue;
        }
        decoded.push(values);
    }
    decoded
}

fn lon_lat_violation(values: &[f64]) -> Option<TupleRejection> {
    let [lon, lat, ..] = *values else {
        return None;
    };
    if !valid_longitude(lon) {
        return Some(TupleRejection::Longitude(lon));
    }
    if !valid_latitude(lat) {
        return Some(TupleRejection::Latitude(lat));
    }
    None
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "decoded totals are scaled integers converted back to degrees"
)]
fn scale(total: i64, factor: f64) -> f64 {
    total as f64 / factor
}

/// Reads variable-length values from the biased byte stream.
struct GroupReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> GroupReader<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    const fn is_exhausted(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Read one zig-zag value, or `None` if input ends mid-value.
    fn next_value(&mut self) -> Option<i64> {
        let mut result = 0_i64;
        let mut shift = 0_u32;
        loop {
            let byte = i64::from(*self.bytes.get(self.position)?) - BYTE_BIAS;
            self.position = self.position.saturating_add(1);
            // Bits beyond the width of the accumulator are dropped.
            if shift < i64::BITS {
                result |= (byte & GROUP_MASK) << shift;
            }
            shift = shift.saturating_add(GROUP_BITS);
            if byte < CONTINUATION_BIT {
                break;
            }
        }
        Some(if result & 1 == 1 {
            !(result >> 1)
        } else {
            result >> 1
        })
    }
}
