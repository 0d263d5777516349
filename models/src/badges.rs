// models/src/badges.rs

/// A label/color pair for rendering a status or type chip.
///
/// The mapping from any enum to a badge is total: unrecognized wire values
/// land on the enum's `Unknown` variant, which maps to a neutral style
/// instead of failing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Badge {
    pub label: &'static str,
    pub color: &'static str,
}

impl Badge {
    pub const fn new(label: &'static str, color: &'static str) -> Self {
        Badge { label, color }
    }

    /// Neutral fallback style used by every `Unknown` variant.
    pub const fn neutral(label: &'static str) -> Self {
        Badge {
            label,
            color: "slate",
        }
    }
}

pub trait Badged {
    fn badge(&self) -> Badge;
}
