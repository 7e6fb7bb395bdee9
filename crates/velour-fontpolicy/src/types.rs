//! Font description and resolution types.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// The generic family used when a preference names no family at all.
pub const GENERIC_FAMILY: &str = "sans";

/// The point size used when a preference carries no (parsable) size.
pub const DEFAULT_SIZE_POINTS: u32 = 10;

/// Style flags for a resolved font.
///
/// A bitmask with [`BOLD`](Self::BOLD) and [`ITALIC`](Self::ITALIC) bits;
/// [`PLAIN`](Self::PLAIN) is the empty mask.
///
/// # Example
///
/// ```
/// use velour_fontpolicy::types::FontStyle;
///
/// let style = FontStyle::BOLD | FontStyle::ITALIC;
/// assert!(style.is_bold());
/// assert!(style.is_italic());
/// assert!(!FontStyle::PLAIN.is_bold());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontStyle(u8);

impl FontStyle {
    /// No style flags.
    pub const PLAIN: Self = Self(0);
    /// Bold weight.
    pub const BOLD: Self = Self(1 << 0);
    /// Italic slant.
    pub const ITALIC: Self = Self(1 << 1);

    /// Check whether all flags in `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether no flags are set.
    pub const fn is_plain(self) -> bool {
        self.0 == 0
    }

    /// Check whether the bold flag is set.
    pub const fn is_bold(self) -> bool {
        self.contains(Self::BOLD)
    }

    /// Check whether the italic flag is set.
    pub const fn is_italic(self) -> bool {
        self.contains(Self::ITALIC)
    }

    /// The raw flag bits.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for FontStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FontStyle {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_bold(), self.is_italic()) {
            (false, false) => write!(f, "plain"),
            (true, false) => write!(f, "bold"),
            (false, true) => write!(f, "italic"),
            (true, true) => write!(f, "bold italic"),
        }
    }
}

/// A font preference as parsed from the desktop's font-name string.
///
/// Produced by [`parse_font_name`](crate::parse::parse_font_name); the
/// default value is what an absent or empty preference resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescription {
    /// Space-joined family name tokens.
    pub family: String,
    /// Whether a `bold` keyword was present.
    pub bold: bool,
    /// Whether an `italic` keyword was present.
    pub italic: bool,
    /// Point size (last numeric token wins).
    pub size_points: u32,
}

impl FontDescription {
    /// The style flags this description implies.
    pub fn style(&self) -> FontStyle {
        let mut style = FontStyle::PLAIN;
        if self.bold {
            style |= FontStyle::BOLD;
        }
        if self.italic {
            style |= FontStyle::ITALIC;
        }
        style
    }
}

impl Default for FontDescription {
    fn default() -> Self {
        Self {
            family: GENERIC_FAMILY.to_string(),
            bold: false,
            italic: false,
            size_points: DEFAULT_SIZE_POINTS,
        }
    }
}

/// A concrete font descriptor, ready for the font-set factory.
///
/// `pixel_size` is always at least 1, whatever the inputs were.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFont {
    /// Family name ([`GENERIC_FAMILY`] when the preference named none).
    pub family: String,
    /// Style bitmask.
    pub style: FontStyle,
    /// Size in device pixels, >= 1.
    pub pixel_size: u32,
}

impl ResolvedFont {
    /// Convert to cosmic-text attributes for text shaping.
    ///
    /// The generic `"sans"` family maps to [`cosmic_text::Family::SansSerif`]
    /// so the shaper applies its own fallback rather than looking for a font
    /// literally named "sans".
    pub fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        let family = if self.family == GENERIC_FAMILY {
            cosmic_text::Family::SansSerif
        } else {
            cosmic_text::Family::Name(&self.family)
        };
        let weight = if self.style.is_bold() {
            cosmic_text::Weight::BOLD
        } else {
            cosmic_text::Weight::NORMAL
        };
        let style = if self.style.is_italic() {
            cosmic_text::Style::Italic
        } else {
            cosmic_text::Style::Normal
        };

        cosmic_text::Attrs::new()
            .family(family)
            .weight(weight)
            .style(style)
    }
}

impl fmt::Display for ResolvedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}px", self.family, self.style, self.pixel_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_bitmask() {
        let style = FontStyle::BOLD | FontStyle::ITALIC;
        assert!(style.contains(FontStyle::BOLD));
        assert!(style.contains(FontStyle::ITALIC));
        assert!(!style.is_plain());

        let mut style = FontStyle::PLAIN;
        assert!(style.is_plain());
        style |= FontStyle::ITALIC;
        assert!(style.is_italic());
        assert!(!style.is_bold());
    }

    #[test]
    fn test_style_display() {
        assert_eq!(FontStyle::PLAIN.to_string(), "plain");
        assert_eq!((FontStyle::BOLD | FontStyle::ITALIC).to_string(), "bold italic");
    }

    #[test]
    fn test_description_defaults() {
        let desc = FontDescription::default();
        assert_eq!(desc.family, GENERIC_FAMILY);
        assert_eq!(desc.size_points, DEFAULT_SIZE_POINTS);
        assert!(desc.style().is_plain());
    }

    #[test]
    fn test_generic_family_maps_to_sans_serif() {
        let font = ResolvedFont {
            family: GENERIC_FAMILY.to_string(),
            style: FontStyle::PLAIN,
            pixel_size: 13,
        };
        let attrs = font.to_attrs();
        assert_eq!(attrs.family, cosmic_text::Family::SansSerif);
    }

    #[test]
    fn test_named_family_preserved_in_attrs() {
        let font = ResolvedFont {
            family: "DejaVu Sans".to_string(),
            style: FontStyle::BOLD,
            pixel_size: 13,
        };
        let attrs = font.to_attrs();
        assert_eq!(attrs.family, cosmic_text::Family::Name("DejaVu Sans"));
        assert_eq!(attrs.weight, cosmic_text::Weight::BOLD);
    }
}
