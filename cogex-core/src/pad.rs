use std::fmt;

use serde::{Deserialize, Serialize};

/// A value that can be zero-padded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PadValue {
    Int(i64),
    /// Written with Rust's float formatting, which never switches to
    /// exponent notation: `1e-7` becomes `0.0000001` and `1e16` becomes
    /// `10000000000000000.0`.
    Float(f64),
    Text(String),
}

impl fmt::Display for PadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadValue::Int(v) => write!(f, "{v}"),
            // whole floats keep their trailing `.0`
            PadValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            PadValue::Float(v) => write!(f, "{v}"),
            PadValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PadValue {
    fn from(value: &str) -> Self {
        PadValue::Text(value.to_string())
    }
}

impl From<String> for PadValue {
    fn from(value: String) -> Self {
        PadValue::Text(value)
    }
}

impl From<f64> for PadValue {
    fn from(value: f64) -> Self {
        PadValue::Float(value)
    }
}

macro_rules! pad_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for PadValue {
            fn from(value: $ty) -> Self {
                PadValue::Int(value as i64)
            }
        })*
    };
}

pad_from_int!(i32, i64, u8, u16, u32, usize);

/// Where padding zeros are inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadSide {
    #[default]
    Front,
    End,
}

/// Pads `value` with `'0'` until it is `width` characters long.
///
/// Values already at or beyond `width` come back unchanged.
pub fn fill_zeros(value: impl Into<PadValue>, width: usize, side: PadSide) -> String {
    let text = value.into().to_string();
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let zeros = "0".repeat(width - len);
    match side {
        PadSide::Front => zeros + &text,
        PadSide::End => text + &zeros,
    }
}
