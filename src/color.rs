//! Shape colors
//!
//! A color is either an HSL triple (what the random policy produces) or any
//! CSS color string supplied by configuration.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hue range (degrees, exclusive upper bound)
pub const HUE_RANGE: std::ops::Range<u16> = 0..360;
/// Saturation range (percent, inclusive)
pub const SATURATION_RANGE: std::ops::RangeInclusive<u8> = 40..=100;
/// Lightness range (percent, inclusive)
pub const LIGHTNESS_RANGE: std::ops::RangeInclusive<u8> = 50..=90;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Hsl { h: u16, s: u8, l: u8 },
    Css(String),
}

impl Color {
    pub fn css(value: impl Into<String>) -> Self {
        Color::Css(value.into())
    }

    /// Bright random color: any hue, saturation 40-100%, lightness 50-90%
    pub fn random_bright<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Color::Hsl {
            h: rng.random_range(HUE_RANGE),
            s: rng.random_range(SATURATION_RANGE),
            l: rng.random_range(LIGHTNESS_RANGE),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hsl { h, s, l } => write!(f, "hsl({}, {}%, {}%)", h, s, l),
            Color::Css(value) => f.write_str(value),
        }
    }
}

/// How a newly spawned shape gets its color
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    #[default]
    Random,
    Fixed(Color),
}

impl ColorPolicy {
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        match self {
            ColorPolicy::Random => Color::random_bright(rng),
            ColorPolicy::Fixed(color) => color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_css_formatting() {
        let color = Color::Hsl { h: 120, s: 55, l: 70 };
        assert_eq!(color.to_string(), "hsl(120, 55%, 70%)");
        assert_eq!(Color::css("#ff0000").to_string(), "#ff0000");
    }

    #[test]
    fn test_fixed_policy_ignores_rng() {
        let mut rng = Pcg32::seed_from_u64(7);
        let policy = ColorPolicy::Fixed(Color::css("red"));
        for _ in 0..10 {
            assert_eq!(policy.pick(&mut rng), Color::css("red"));
        }
    }

    #[test]
    fn test_color_json_forms() {
        let css: Color = serde_json::from_str("\"black\"").unwrap();
        assert_eq!(css, Color::css("black"));

        let hsl: Color = serde_json::from_str(r#"{"h": 10, "s": 50, "l": 60}"#).unwrap();
        assert_eq!(hsl, Color::Hsl { h: 10, s: 50, l: 60 });
    }

    proptest! {
        #[test]
        fn random_colors_stay_bright(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            match ColorPolicy::Random.pick(&mut rng) {
                Color::Hsl { h, s, l } => {
                    prop_assert!(HUE_RANGE.contains(&h));
                    prop_assert!(SATURATION_RANGE.contains(&s));
                    prop_assert!(LIGHTNESS_RANGE.contains(&l));
                }
                other => prop_assert!(false, "expected HSL, got {:?}", other),
            }
        }
    }
}
