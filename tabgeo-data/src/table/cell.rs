//! Loosely-typed cell values.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// One cell of a tabular column.
///
/// Cells deserialize from plain JSON scalars: `null`, booleans, numbers and
/// strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// No value.
    #[default]
    Null,
    /// A boolean flag.
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// Free text.
    Text(String),
}

impl CellValue {
    /// Interpret the cell as a number.
    ///
    /// Numbers pass through, text is parsed after trimming. Booleans, nulls,
    /// unparsable text and NaN all read as `None`.
    ///
    /// # Examples
    /// ```
    /// use tabgeo_data::CellValue;
    ///
    /// assert_eq!(CellValue::from(" 12.5 ").as_number(), Some(12.5));
    /// assert_eq!(CellValue::from("wide").as_number(), None);
    /// assert_eq!(CellValue::Null.as_number(), None);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Null | Self::Bool(_) => return None,
        };
        (!value.is_nan()).then_some(value)
    }

    /// Interpret the cell as override text.
    ///
    /// Empty-ish cells (null, `false`, zero, NaN and the empty string) read as
    /// `None`; everything else is rendered with [`CellValue::to_display`].
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        let present = match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Text(text) => !text.is_empty(),
        };
        present.then(|| self.to_display().into_owned())
    }

    /// Render the cell as text. Null renders as the empty string.
    #[must_use]
    pub fn to_display(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Null => Cow::Borrowed(""),
            Self::Bool(flag) => Cow::Owned(flag.to_string()),
            Self::Number(value) => Cow::Owned(value.to_string()),
        }
    }

    /// Report whether the cell holds no value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
