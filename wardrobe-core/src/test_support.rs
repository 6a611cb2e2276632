//! Test-only fixtures shared by unit and behaviour tests across the
//! workspace.

use crate::{Category, Color, Garment, Scorer, Style};

/// Construct a garment with explicit category, color and style.
#[must_use]
pub fn garment(id: &str, category: Category, color: Color, style: Style) -> Garment {
    Garment::new(id, category)
        .with_color(color)
        .with_style(style)
}

/// `Scorer` returning the same score for every multi-garment outfit.
///
/// Affinity is the fixed score and every pair is compatible, so generator
/// behaviour can be tested independently of the color tables.
#[derive(Debug, Copy, Clone)]
pub struct FixedScorer(pub u8);

impl Scorer for FixedScorer {
    fn affinity(&self, _a: &Garment, _b: &Garment) -> u8 {
        self.0
    }

    fn compatible(&self, _a: &Garment, _b: &Garment) -> bool {
        true
    }

    fn score(&self, garments: &[&Garment]) -> u8 {
        match garments.len() {
            0 => 0,
            1 => crate::MAX_SCORE,
            _ => Self::sanitise(i64::from(self.0)),
        }
    }
}
