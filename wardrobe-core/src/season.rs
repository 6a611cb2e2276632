//! Seasons a garment is suited to.

use crate::label::{ParseLabelError, normalise};

/// Recommended season for a garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Season {
    /// March to May.
    Spring,
    /// June to August.
    Summer,
    /// September to November.
    Autumn,
    /// December to February.
    Winter,
    /// Wearable in any season.
    #[default]
    AllSeason,
}

impl Season {
    /// Every season, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Spring,
        Self::Summer,
        Self::Autumn,
        Self::Winter,
        Self::AllSeason,
    ];

    /// Return the season as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
            Self::AllSeason => "all-season",
        }
    }

    /// Report whether a garment tagged with `self` can be worn in `requested`.
    ///
    /// # Examples
    /// ```
    /// use wardrobe_core::Season;
    ///
    /// assert!(Season::AllSeason.suits(Season::Winter));
    /// assert!(Season::Winter.suits(Season::Winter));
    /// assert!(!Season::Summer.suits(Season::Winter));
    /// ```
    #[must_use]
    pub fn suits(self, requested: Self) -> bool {
        self == Self::AllSeason || requested == Self::AllSeason || self == requested
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Season {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = normalise(s);
        Self::ALL
            .into_iter()
            .find(|season| season.as_str() == label)
            .ok_or_else(|| ParseLabelError::new("season", s))
    }
}
