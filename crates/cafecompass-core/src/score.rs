//! 1–5 quality scores and their star-glyph rendering.

use serde::{Deserialize, Serialize};

pub const FILLED_STAR: char = '★';
pub const HOLLOW_STAR: char = '☆';

/// A quality score on the 1–5 scale used for seating, outlets, and noise.
///
/// Construction clamps out-of-range values, so a `Score` held anywhere in the
/// system is always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Renders the score as exactly five glyphs: `value` filled stars
    /// followed by hollow ones.
    #[must_use]
    pub fn stars(self) -> String {
        render_stars(self.0)
    }

    /// Renders the score with the noise→quietness inversion: `6 - value`
    /// filled stars, so the quietest café (noise 1) shows five filled.
    #[must_use]
    pub fn stars_inverted(self) -> String {
        render_stars(Self::MAX + Self::MIN - self.0)
    }
}

fn render_stars(filled: u8) -> String {
    let filled = usize::from(filled.clamp(Score::MIN, Score::MAX));
    let total = usize::from(Score::MAX);
    let mut out = String::with_capacity(total * FILLED_STAR.len_utf8());
    for _ in 0..filled {
        out.push(FILLED_STAR);
    }
    for _ in filled..total {
        out.push(HOLLOW_STAR);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_below_minimum() {
        assert_eq!(Score::new(0).value(), 1);
    }

    #[test]
    fn new_clamps_above_maximum() {
        assert_eq!(Score::new(9).value(), 5);
    }

    #[test]
    fn stars_always_render_five_glyphs() {
        for value in Score::MIN..=Score::MAX {
            let rendered = Score::new(value).stars();
            assert_eq!(rendered.chars().count(), 5, "score {value}: {rendered}");
        }
    }

    #[test]
    fn stars_fill_count_matches_score() {
        for value in Score::MIN..=Score::MAX {
            let rendered = Score::new(value).stars();
            let filled = rendered.chars().filter(|&c| c == FILLED_STAR).count();
            assert_eq!(filled, usize::from(value), "score {value}: {rendered}");
        }
    }

    #[test]
    fn inverted_stars_fill_six_minus_score() {
        for value in Score::MIN..=Score::MAX {
            let rendered = Score::new(value).stars_inverted();
            let filled = rendered.chars().filter(|&c| c == FILLED_STAR).count();
            assert_eq!(filled, usize::from(6 - value), "score {value}: {rendered}");
            assert_eq!(rendered.chars().count(), 5);
        }
    }

    #[test]
    fn mid_score_renders_expected_sequence() {
        assert_eq!(Score::new(3).stars(), "★★★☆☆");
        assert_eq!(Score::new(3).stars_inverted(), "★★★☆☆");
        assert_eq!(Score::new(1).stars_inverted(), "★★★★★");
        assert_eq!(Score::new(5).stars_inverted(), "★☆☆☆☆");
    }

    #[test]
    fn score_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Score::new(4)).expect("serialize");
        assert_eq!(json, "4");
    }
}
