//! Graded color compatibility.

use wardrobe_core::Color;

/// Score used when either color is unknown or a lookup falls outside the
/// table.
pub const DEFAULT_COLOR_SCORE: u8 = 50;

/// Minimum score at which two distinct colors count as compatible.
pub const COMPATIBLE_COLOR_SCORE: u8 = 70;

/// Pairing quality indexed by [`Color::palette_index`].
///
/// Rows and columns follow [`Color::PALETTE`]. The table is symmetric.
/// Neutrals pair highly with almost everything; identical colors sit in the
/// middle of the range so repeated colors do not dominate.
#[rustfmt::skip]
const COLOR_SCORES: [[u8; 14]; 14] = [
    //  blk  wht  gry  brn  bge  red  pnk  org  yel  grn  blu  prp  nvy  crm
    [   70, 100,  90,  60,  85,  80,  75,  60,  65,  70,  85,  80,  95,  90], // black
    [  100,  70,  90,  80,  95,  85,  90,  85,  90,  85,  95,  85,  95,  85], // white
    [   90,  90,  80,  70,  85,  75,  80,  65,  70,  75,  90,  85,  90,  85], // gray
    [   60,  80,  70,  75,  95,  65,  70,  80,  75,  85,  70,  60,  65,  90], // brown
    [   85,  95,  85,  95,  80,  70,  85,  85,  80,  80,  85,  75,  80,  95], // beige
    [   80,  85,  75,  65,  70,  60,  65,  50,  55,  45,  70,  65,  80,  75], // red
    [   75,  90,  80,  70,  85,  65,  70,  70,  75,  60,  80,  85,  75,  90], // pink
    [   60,  85,  65,  80,  85,  50,  70,  60,  85,  55,  70,  60,  65,  85], // orange
    [   65,  90,  70,  75,  80,  55,  75,  85,  60,  70,  75,  65,  70,  85], // yellow
    [   70,  85,  75,  85,  80,  45,  60,  55,  70,  75,  70,  65,  75,  80], // green
    [   85,  95,  90,  70,  85,  70,  80,  70,  75,  70,  80,  85,  90,  90], // blue
    [   80,  85,  85,  60,  75,  65,  85,  60,  65,  65,  85,  70,  80,  80], // purple
    [   95,  95,  90,  65,  80,  80,  75,  65,  70,  75,  90,  80,  85,  85], // navy
    [   90,  85,  85,  90,  95,  75,  90,  85,  85,  80,  90,  80,  85,  80], // cream
];

/// Pairing quality of two colors in `0..=100`.
///
/// An [`Color::Unknown`] on either side yields [`DEFAULT_COLOR_SCORE`].
///
/// # Examples
/// ```
/// use wardrobe_core::Color;
/// use wardrobe_scorer::color_score;
///
/// assert_eq!(color_score(Color::Black, Color::White), 100);
/// assert_eq!(color_score(Color::Red, Color::Green), 45);
/// assert_eq!(color_score(Color::Unknown, Color::Navy), 50);
/// ```
#[must_use]
pub fn color_score(a: Color, b: Color) -> u8 {
    let (Some(row), Some(column)) = (a.palette_index(), b.palette_index()) else {
        return DEFAULT_COLOR_SCORE;
    };
    COLOR_SCORES
        .get(row)
        .and_then(|scores| scores.get(column))
        .copied()
        .unwrap_or(DEFAULT_COLOR_SCORE)
}

/// Report whether two colors pair well.
///
/// Identical colors are always compatible; distinct colors must reach
/// [`COMPATIBLE_COLOR_SCORE`].
#[must_use]
pub fn color_compatible(a: Color, b: Color) -> bool {
    a == b || color_score(a, b) >= COMPATIBLE_COLOR_SCORE
}
