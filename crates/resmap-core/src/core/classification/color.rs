use super::palette::{Rgb, scheme_or_default};
use super::rules::ColorClass;
use std::fmt;

/// Opacity at consistency 0.
pub const MIN_OPACITY: f64 = 0.3;
/// Opacity gained between consistency 0 and 1; the ceiling stays below fully opaque.
pub const OPACITY_RANGE: f64 = 0.6;

/// A base color plus opacity, rendered as a CSS `rgba(...)` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}

/// Picks the color class for a raw type label.
///
/// Classes are tried in [`ColorClass::PRIORITY`] order and the first one with a
/// keyword in the lowercased label wins. Labels that match nothing resolve to
/// [`ColorClass::FALLBACK`].
pub fn classify(label: &str) -> ColorClass {
    let lower = label.to_lowercase();
    ColorClass::PRIORITY
        .into_iter()
        .find(|class| class.keywords().iter().any(|kw| lower.contains(kw)))
        .unwrap_or(ColorClass::FALLBACK)
}

pub fn opacity_for(consistency: f64) -> f64 {
    MIN_OPACITY + consistency * OPACITY_RANGE
}

/// Resolves the display color of a record in the given scheme.
pub fn resolve_color(label: &str, consistency: f64, scheme_id: &str) -> Rgba {
    let scheme = scheme_or_default(scheme_id);
    Rgba {
        rgb: scheme.color(classify(label)),
        alpha: opacity_for(consistency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_tag_label_resolves_to_highest_priority_class() {
        assert_eq!(classify("H-bond; Salt-bridge"), ColorClass::HBond);
        assert_eq!(classify("Salt-bridge; H-bond"), ColorClass::HBond);
        assert_eq!(classify("Clash; Proximal"), ColorClass::Proximal);
        assert_eq!(
            resolve_color("H-bond; Salt-bridge", 0.5, "classic").to_string(),
            "rgba(29, 29, 31, 0.6)"
        );
    }

    #[test]
    fn unknown_label_falls_back_to_hbond_color() {
        assert_eq!(classify("unknown-exotic-type"), ColorClass::HBond);
        assert_eq!(classify(""), ColorClass::HBond);
        assert_eq!(
            resolve_color("unknown-exotic-type", 0.5, "classic").rgb,
            [29, 29, 31]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("SALT BRIDGE"), ColorClass::SaltBridge);
        assert_eq!(classify("Cation-π"), ColorClass::CationAnionPi);
        assert_eq!(classify("CH-O/N bond"), ColorClass::ChOn);
    }

    #[test]
    fn apolar_labels_land_in_vdw_class() {
        assert_eq!(classify("Apolar vdW contact"), ColorClass::Vdw);
        assert_eq!(classify("polar"), ColorClass::Vdw);
    }

    #[test]
    fn opacity_spans_floor_to_ceiling() {
        assert_eq!(opacity_for(0.0), 0.3);
        assert!((opacity_for(1.0) - 0.9).abs() < 1e-12);
        let mut previous = opacity_for(0.0);
        for step in 1..=10 {
            let next = opacity_for(step as f64 / 10.0);
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve_color("Halogen bond", 0.42, "pastel");
        let b = resolve_color("Halogen bond", 0.42, "pastel");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.rgb, [179, 229, 252]);
    }

    #[test]
    fn unknown_scheme_uses_classic_palette() {
        assert_eq!(
            resolve_color("Clash", 1.0, "does-not-exist").rgb,
            resolve_color("Clash", 1.0, "classic").rgb
        );
    }
}
