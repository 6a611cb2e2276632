//! Boolean style adjacency.
//!
//! Styles that mix well are declared once as undirected edges. The lookup
//! table is built from the edge list at compile time with both directions
//! populated, so `style_compatible(a, b) == style_compatible(b, a)` always
//! holds.

use wardrobe_core::Style;

const STYLE_COUNT: usize = Style::ALL.len();

/// Pairs of distinct styles that mix well together.
pub const STYLE_EDGES: [(Style, Style); 10] = [
    (Style::Casual, Style::Sport),
    (Style::Casual, Style::Street),
    (Style::Casual, Style::Vintage),
    (Style::Casual, Style::Business),
    (Style::Formal, Style::Business),
    (Style::Formal, Style::Party),
    (Style::Party, Style::Street),
    (Style::Party, Style::Vintage),
    (Style::Vintage, Style::Street),
    (Style::Sport, Style::Street),
];

const STYLE_TABLE: [[bool; STYLE_COUNT]; STYLE_COUNT] = build_style_table();

#[expect(
    clippy::indexing_slicing,
    reason = "const evaluation rejects any out-of-range index at compile time"
)]
const fn build_style_table() -> [[bool; STYLE_COUNT]; STYLE_COUNT] {
    let mut table = [[false; STYLE_COUNT]; STYLE_COUNT];
    let other = Style::Other.index();

    let mut i = 0;
    while i < STYLE_COUNT {
        table[i][i] = true;
        table[i][other] = true;
        table[other][i] = true;
        i += 1;
    }

    let mut edge = 0;
    while edge < STYLE_EDGES.len() {
        let (a, b) = STYLE_EDGES[edge];
        table[a.index()][b.index()] = true;
        table[b.index()][a.index()] = true;
        edge += 1;
    }
    table
}

/// Report whether two styles mix well.
///
/// Identical styles are always compatible and [`Style::Other`] mixes with
/// everything.
///
/// # Examples
/// ```
/// use wardrobe_core::Style;
/// use wardrobe_scorer::style_compatible;
///
/// assert!(style_compatible(Style::Business, Style::Formal));
/// assert!(style_compatible(Style::Formal, Style::Business));
/// assert!(!style_compatible(Style::Sport, Style::Formal));
/// ```
#[must_use]
pub fn style_compatible(a: Style, b: Style) -> bool {
    STYLE_TABLE
        .get(a.index())
        .and_then(|row| row.get(b.index()))
        .copied()
        .unwrap_or(false)
}
