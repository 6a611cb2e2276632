//! Test-only fixtures for `wardrobe-generator`.
//!
//! Available to unit tests and, through the `test-support` feature, to other
//! workspace crates.

use wardrobe_core::test_support::garment;
use wardrobe_core::{Category, Color, Garment, Occasion, Season, Style};

/// A small, well-covered wardrobe: two dresses, three tops, three bottoms,
/// two pairs of shoes, a coat and two accessories.
///
/// The blazer and trousers are tagged for `work`; the sandals are summer
/// only.
///
/// # Examples
/// ```rust
/// use wardrobe_generator::test_support::capsule_wardrobe;
///
/// assert_eq!(capsule_wardrobe().len(), 13);
/// ```
#[must_use]
pub fn capsule_wardrobe() -> Vec<Garment> {
    vec![
        garment("dress-navy", Category::Dress, Color::Navy, Style::Formal),
        garment("dress-red", Category::Dress, Color::Red, Style::Party),
        garment("tee-white", Category::Top, Color::White, Style::Casual),
        for_work(garment("shirt-blue", Category::Top, Color::Blue, Style::Business)),
        garment("knit-cream", Category::Top, Color::Cream, Style::Vintage),
        garment("jeans-navy", Category::Bottom, Color::Navy, Style::Casual),
        for_work(garment("trousers-gray", Category::Bottom, Color::Gray, Style::Business)),
        garment("skirt-black", Category::Bottom, Color::Black, Style::Party),
        garment("sneakers-white", Category::Shoes, Color::White, Style::Sport),
        garment("sandals-beige", Category::Shoes, Color::Beige, Style::Casual)
            .with_season(Season::Summer),
        for_work(garment("blazer-black", Category::Outerwear, Color::Black, Style::Business)),
        garment("bag-brown", Category::Bag, Color::Brown, Style::Casual),
        garment("scarf-pink", Category::Accessories, Color::Pink, Style::Other),
    ]
}

fn for_work(mut garment: Garment) -> Garment {
    garment.occasions.extend(Occasion::new("work").ok());
    garment
}

/// Garments whose colors clash with each other.
///
/// Useful with a strict scorer or high thresholds to check that generation
/// terminates with few or no outfits.
#[must_use]
pub fn clashing_wardrobe() -> Vec<Garment> {
    vec![
        garment("top-red", Category::Top, Color::Red, Style::Sport),
        garment("bottom-green", Category::Bottom, Color::Green, Style::Formal),
        garment("shoes-orange", Category::Shoes, Color::Orange, Style::Business),
        garment("top-yellow", Category::Top, Color::Yellow, Style::Formal),
    ]
}
