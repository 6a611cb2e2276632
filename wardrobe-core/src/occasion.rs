//! Occasion labels used to narrow the garment pool.

use thiserror::Error;

use crate::label::normalise;

/// A normalised occasion label such as `work` or `date`.
///
/// Labels are trimmed and ASCII-lowercased so that `"Work "` and `"work"`
/// compare equal.
///
/// # Examples
/// ```
/// use wardrobe_core::Occasion;
///
/// # fn main() -> Result<(), wardrobe_core::OccasionError> {
/// let occasion = Occasion::new(" Party ")?;
/// assert_eq!(occasion.as_str(), "party");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Occasion(String);

/// Errors returned by [`Occasion::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OccasionError {
    /// The label was empty after trimming.
    #[error("occasion label must not be empty")]
    Empty,
}

impl Occasion {
    /// Validate and normalise an occasion label.
    ///
    /// # Errors
    /// Returns [`OccasionError::Empty`] for blank labels.
    pub fn new(label: impl AsRef<str>) -> Result<Self, OccasionError> {
        let normalised = normalise(label.as_ref());
        if normalised.is_empty() {
            return Err(OccasionError::Empty);
        }
        Ok(Self(normalised))
    }

    /// Borrow the normalised label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Occasion {
    type Err = OccasionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Occasion {
    type Error = OccasionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Occasion> for String {
    fn from(value: Occasion) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_labels(#[case] label: &str) {
        assert_eq!(Occasion::new(label), Err(OccasionError::Empty));
    }

    #[rstest]
    fn normalises_case_and_whitespace() {
        let lhs = Occasion::new("Work ").expect("valid label");
        let rhs = Occasion::new("work").expect("valid label");
        assert_eq!(lhs, rhs);
    }
}
