//! Human-readable rationale for a scored outfit.

use wardrobe_core::{Category, Color, Garment};

/// Score from which an outfit is described as excellent.
pub const EXCELLENT_SCORE: u8 = 85;

/// Score from which an outfit is described as balanced.
pub const BALANCED_SCORE: u8 = 70;

/// Distinct known colors in member order.
fn distinct_colors(garments: &[&Garment]) -> Vec<Color> {
    let mut colors: Vec<Color> = Vec::with_capacity(garments.len());
    for color in garments.iter().map(|g| g.color).filter(|c| c.is_known()) {
        if !colors.contains(&color) {
            colors.push(color);
        }
    }
    colors
}

fn join(colors: &[Color], separator: &str) -> String {
    colors
        .iter()
        .map(|color| color.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Describe why an outfit received its score.
///
/// The sentence depends on the score band and on whether a dress anchors
/// the look. Known colors are listed in member order.
///
/// # Examples
/// ```
/// use wardrobe_core::{Category, Color, Garment};
/// use wardrobe_scorer::describe_outfit;
///
/// let top = Garment::new("t", Category::Top).with_color(Color::Navy);
/// let bottom = Garment::new("b", Category::Bottom).with_color(Color::Beige);
/// let reason = describe_outfit(&[&top, &bottom], 90);
/// assert!(reason.contains("navy, beige"));
/// ```
#[must_use]
pub fn describe_outfit(garments: &[&Garment], score: u8) -> String {
    let colors = distinct_colors(garments);
    let dress = garments.iter().any(|g| g.category == Category::Dress);

    if score >= EXCELLENT_SCORE {
        let palette = if colors.is_empty() {
            "These pieces".to_owned()
        } else {
            format!("The colors {}", join(&colors, ", "))
        };
        if dress {
            format!("Elegant dress with spot-on pairings. {palette} make a harmonious, refined look.")
        } else {
            format!("Excellent combination! {palette} complement each other for a polished look.")
        }
    } else if score >= BALANCED_SCORE {
        if dress {
            "Versatile dress with good pairings. A balanced, pleasant look.".to_owned()
        } else if colors.is_empty() {
            "Good pairing. A balanced, easy outfit.".to_owned()
        } else {
            format!("Good pairing of {}. A balanced, easy outfit.", join(&colors, " and "))
        }
    } else if dress {
        "Bold and creative. A dress that will not go unnoticed!".to_owned()
    } else {
        "An unexpected, original combination for when you feel daring.".to_owned()
    }
}
