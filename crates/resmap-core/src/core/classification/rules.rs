use std::fmt;

/// A user-selectable filter category and the keywords that identify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub id: &'static str,
    pub label: &'static str,
    /// Lowercase substrings searched for in the lowercased type label.
    pub keywords: &'static [&'static str],
}

impl CategoryRule {
    /// Returns `true` if any keyword occurs in the already lowercased label.
    pub fn matches_lowercase(&self, label_lower: &str) -> bool {
        self.keywords.iter().any(|kw| label_lower.contains(kw))
    }
}

#[rustfmt::skip]
pub static FILTER_CATEGORIES: &[CategoryRule] = &[
    CategoryRule { id: "h-bond",      label: "H-bond",            keywords: &["h-bond"] },
    CategoryRule { id: "salt-bridge", label: "Salt-bridge",       keywords: &["salt-bridge", "salt bridge"] },
    CategoryRule { id: "pi-pi",       label: "π-π interactions",  keywords: &["pi-pi", "π-π"] },
    CategoryRule { id: "cation-pi",   label: "Cation-π",          keywords: &["cation-π", "cation-pi"] },
    CategoryRule { id: "anion-pi",    label: "Anion-π",           keywords: &["anion-π", "anion-pi"] },
    CategoryRule { id: "ch-on",       label: "CH-O/N bonds",      keywords: &["ch-o", "c-h"] },
    CategoryRule { id: "ch-pi",       label: "CH-π",              keywords: &["ch-π", "ch-pi"] },
    CategoryRule { id: "halogen",     label: "Halogen bonds",     keywords: &["halogen"] },
    CategoryRule { id: "polar-vdw",   label: "Polar vdW",         keywords: &["polar vdw", "polar_vdw"] },
    CategoryRule { id: "apolar-vdw",  label: "Apolar vdW",        keywords: &["apolar vdw", "apolar_vdw"] },
    CategoryRule { id: "proximal",    label: "Proximal",          keywords: &["proximal"] },
    CategoryRule { id: "clash",       label: "Clash",             keywords: &["clash"] },
    CategoryRule { id: "water",       label: "Water mediated",    keywords: &["water"] },
    CategoryRule { id: "metal",       label: "Metal mediated",    keywords: &["metal"] },
    CategoryRule { id: "ss-bond",     label: "S-S bonds",         keywords: &["s-s", "ss"] },
];

pub fn find_category(id: &str) -> Option<&'static CategoryRule> {
    FILTER_CATEGORIES.iter().find(|rule| rule.id == id)
}

pub fn all_category_ids() -> impl Iterator<Item = &'static str> {
    FILTER_CATEGORIES.iter().map(|rule| rule.id)
}

/// Coarse visual classes used for coloring, listed in evaluation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    HBond,
    SaltBridge,
    PiPi,
    CationAnionPi,
    ChOn,
    Halogen,
    Vdw,
    Proximal,
    Clash,
}

impl ColorClass {
    /// Evaluation order; the first class whose keywords match wins.
    pub const PRIORITY: [ColorClass; 9] = [
        ColorClass::HBond,
        ColorClass::SaltBridge,
        ColorClass::PiPi,
        ColorClass::CationAnionPi,
        ColorClass::ChOn,
        ColorClass::Halogen,
        ColorClass::Vdw,
        ColorClass::Proximal,
        ColorClass::Clash,
    ];

    /// Class used when no keyword matches.
    pub const FALLBACK: ColorClass = ColorClass::HBond;

    pub fn id(self) -> &'static str {
        match self {
            ColorClass::HBond => "h-bond",
            ColorClass::SaltBridge => "salt-bridge",
            ColorClass::PiPi => "pi-pi",
            ColorClass::CationAnionPi => "cation-anion-pi",
            ColorClass::ChOn => "ch-on",
            ColorClass::Halogen => "halogen",
            ColorClass::Vdw => "vdw",
            ColorClass::Proximal => "proximal",
            ColorClass::Clash => "clash",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ColorClass::HBond => &["h-bond"],
            ColorClass::SaltBridge => &["salt-bridge", "salt bridge"],
            ColorClass::PiPi => &["pi-pi", "π-π"],
            ColorClass::CationAnionPi => &["cation", "anion"],
            ColorClass::ChOn => &["ch-o", "c-h"],
            ColorClass::Halogen => &["halogen"],
            // "polar" also catches "apolar"; kept as listed.
            ColorClass::Vdw => &["vdw", "apolar", "polar"],
            ColorClass::Proximal => &["proximal"],
            ColorClass::Clash => &["clash"],
        }
    }

    /// Position in [`ColorClass::PRIORITY`], also the palette index.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
