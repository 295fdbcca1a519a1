//! Wide-integer handling for packet sequence numbers.
//!
//! Sequence numbers are `uint64` on the wire. Callers may hand them over as any
//! primitive number; [`IntoSequence`] is the single place where such a number is
//! checked and turned into a [`Sequence`]. Unsigned integers convert as is.
//! Signed integers must not be negative, and floating point numbers must be
//! integral and within `[0, MAX_SAFE_INTEGER]`, the range a double represents
//! exactly.

use core::num::ParseIntError;
use core::str::FromStr;

use derive_more::{Display, From, Into};
use displaydoc::Display as DocDisplay;

use crate::error::QueryError;

/// The largest integer a double-precision float represents exactly, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// The sequence number of a packet.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct Sequence(
    #[cfg_attr(feature = "serde", serde(with = "crate::utils::serde_str"))]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    u64,
);

impl Sequence {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Gives the sequence number.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the sequence fits in the exactly representable range
    /// of a double-precision float.
    pub fn is_safe(&self) -> bool {
        self.0 <= MAX_SAFE_INTEGER
    }

    /// Returns the sequence as a float, or `None` if the float would not be exact.
    pub fn to_f64(&self) -> Option<f64> {
        self.is_safe().then_some(self.0 as f64)
    }
}

impl FromStr for Sequence {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl TryFrom<i64> for Sequence {
    type Error = SequenceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| SequenceError::Negative {
                value: value.to_string(),
            })
    }
}

impl TryFrom<f64> for Sequence {
    type Error = SequenceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(SequenceError::NotAnInteger {
                value: value.to_string(),
            });
        }

        if value < 0.0 {
            return Err(SequenceError::Negative {
                value: value.to_string(),
            });
        }

        if value > MAX_SAFE_INTEGER as f64 {
            return Err(SequenceError::OutsideSafeRange {
                value: value.to_string(),
                max: MAX_SAFE_INTEGER,
            });
        }

        Ok(Self(value as u64))
    }
}

/// Errors that arise when a caller-supplied number cannot be a sequence.
#[derive(Clone, Debug, PartialEq, Eq, DocDisplay)]
pub enum SequenceError {
    /// sequence number must not be negative, got `{value}`
    Negative { value: String },
    /// sequence number must be a finite integer, got `{value}`
    NotAnInteger { value: String },
    /// sequence number `{value}` is outside the safe integer range [0, {max}]
    OutsideSafeRange { value: String, max: u64 },
}

impl std::error::Error for SequenceError {}

/// Conversion of a plain number into a [`Sequence`].
pub trait IntoSequence {
    fn into_sequence(self) -> Result<Sequence, SequenceError>;
}

impl IntoSequence for Sequence {
    fn into_sequence(self) -> Result<Sequence, SequenceError> {
        Ok(self)
    }
}

macro_rules! impl_into_sequence_lossless {
    ($($ty:ty),*) => {
        $(
            impl IntoSequence for $ty {
                fn into_sequence(self) -> Result<Sequence, SequenceError> {
                    Ok(Sequence(u64::from(self)))
                }
            }
        )*
    };
}

impl_into_sequence_lossless!(u8, u16, u32, u64);

impl IntoSequence for usize {
    fn into_sequence(self) -> Result<Sequence, SequenceError> {
        Ok(Sequence(self as u64))
    }
}

impl IntoSequence for i64 {
    fn into_sequence(self) -> Result<Sequence, SequenceError> {
        Sequence::try_from(self)
    }
}

impl IntoSequence for i32 {
    fn into_sequence(self) -> Result<Sequence, SequenceError> {
        Sequence::try_from(i64::from(self))
    }
}

impl IntoSequence for f64 {
    fn into_sequence(self) -> Result<Sequence, SequenceError> {
        Sequence::try_from(self)
    }
}

impl<T> IntoSequence for &T
where
    T: IntoSequence + Copy,
{
    fn into_sequence(self) -> Result<Sequence, SequenceError> {
        (*self).into_sequence()
    }
}

/// Converts the argument named `field` into a [`Sequence`], failing before any
/// round trip if the value is not a valid sequence number.
pub fn to_sequence<S: IntoSequence>(field: &str, value: S) -> Result<Sequence, QueryError> {
    value
        .into_sequence()
        .map_err(|e| QueryError::invalid_argument(field, e))
}

/// Converts every element of the argument named `field`; a failure names the
/// offending index, e.g. `packet_commitment_sequences[2]`.
pub fn to_sequences<I>(field: &str, values: I) -> Result<Vec<Sequence>, QueryError>
where
    I: IntoIterator,
    I::Item: IntoSequence,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            value
                .into_sequence()
                .map_err(|e| QueryError::invalid_argument(format!("{field}[{i}]"), e))
        })
        .collect()
}
