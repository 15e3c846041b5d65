use super::rules::ColorClass;
use phf::{OrderedMap, phf_ordered_map};

pub type Rgb = [u8; 3];

/// A named palette with one base color per [`ColorClass`], indexed by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub id: &'static str,
    colors: [Rgb; 9],
}

impl ColorScheme {
    pub fn color(&self, class: ColorClass) -> Rgb {
        self.colors[class.index()]
    }
}

pub const DEFAULT_SCHEME: &str = "classic";

// Order: h-bond, salt-bridge, pi-pi, cation-anion-pi, ch-on, halogen, vdw, proximal, clash.
#[rustfmt::skip]
pub static SCHEMES: OrderedMap<&'static str, ColorScheme> = phf_ordered_map! {
    "classic" => ColorScheme { id: "classic", colors: [
        [29, 29, 31], [255, 59, 48], [175, 82, 222], [255, 149, 0], [255, 204, 0],
        [88, 86, 214], [52, 199, 89], [142, 142, 147], [255, 45, 85],
    ]},
    "vibrant" => ColorScheme { id: "vibrant", colors: [
        [255, 0, 127], [255, 87, 34], [156, 39, 176], [255, 193, 7], [76, 175, 80],
        [3, 169, 244], [0, 188, 212], [158, 158, 158], [244, 67, 54],
    ]},
    "pastel" => ColorScheme { id: "pastel", colors: [
        [179, 157, 219], [255, 183, 178], [206, 147, 216], [255, 224, 178], [255, 245, 157],
        [179, 229, 252], [200, 230, 201], [224, 224, 224], [255, 138, 128],
    ]},
    "dark" => ColorScheme { id: "dark", colors: [
        [26, 35, 126], [183, 28, 28], [74, 20, 140], [230, 81, 0], [249, 168, 37],
        [13, 71, 161], [27, 94, 32], [66, 66, 66], [136, 14, 79],
    ]},
    "scientific" => ColorScheme { id: "scientific", colors: [
        [55, 126, 184], [228, 26, 28], [152, 78, 163], [255, 127, 0], [77, 175, 74],
        [166, 86, 40], [247, 129, 191], [153, 153, 153], [255, 255, 51],
    ]},
};

pub fn scheme(id: &str) -> Option<&'static ColorScheme> {
    SCHEMES.get(id)
}

/// Looks up a scheme, falling back to the first declared one for unknown ids.
pub fn scheme_or_default(id: &str) -> &'static ColorScheme {
    SCHEMES.get(id).unwrap_or_else(first_scheme)
}

pub fn scheme_ids() -> impl Iterator<Item = &'static str> {
    SCHEMES.keys().copied()
}

fn first_scheme() -> &'static ColorScheme {
    // The table is a non-empty literal.
    match SCHEMES.index(0) {
        Some((_, scheme)) => scheme,
        None => unreachable!("color scheme table is empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_schemes_in_declaration_order() {
        let ids: Vec<_> = scheme_ids().collect();
        assert_eq!(ids, ["classic", "vibrant", "pastel", "dark", "scientific"]);
        assert_eq!(ids[0], DEFAULT_SCHEME);
    }

    #[test]
    fn scheme_ids_match_their_keys() {
        for (key, scheme) in SCHEMES.entries() {
            assert_eq!(*key, scheme.id);
        }
    }

    #[test]
    fn unknown_scheme_falls_back_to_classic() {
        assert_eq!(scheme_or_default("neon").id, "classic");
        assert!(scheme("neon").is_none());
        assert_eq!(scheme_or_default("dark").id, "dark");
    }

    #[test]
    fn classic_colors_are_indexed_by_class() {
        let classic = scheme_or_default("classic");
        assert_eq!(classic.color(ColorClass::HBond), [29, 29, 31]);
        assert_eq!(classic.color(ColorClass::SaltBridge), [255, 59, 48]);
        assert_eq!(classic.color(ColorClass::Clash), [255, 45, 85]);
    }
}
