/// Conversion of a decoded protobuf response into its plain counterpart.
///
/// Plain types implement `From<Raw>`, which keeps the conversion total: a
/// well-formed decoded message always yields a plain value.
pub trait IntoPlain<T> {
    fn into_plain(self) -> T;
}

impl<T, Raw> IntoPlain<T> for Raw
where
    T: From<Raw>,
{
    fn into_plain(self) -> T {
        T::from(self)
    }
}

/// Serializes 64-bit integers as decimal strings, so values above `2^53 - 1`
/// survive a trip through consumers that parse JSON numbers as doubles.
#[cfg(feature = "serde")]
pub mod serde_str {
    use core::fmt::Display;
    use core::str::FromStr;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
