//! Font policy resolution.
//!
//! A [`FontPolicy`] is the one seam a theme engine consumes: ask it for the
//! control font and it answers, always. The stock [`DesktopFontPolicy`]
//! combines a [`DesktopSettings`] source with a [`ScaleContext`]; the parse
//! runs per call, the context is fixed for the process lifetime.

use velour_platform::{DesktopProperties, DesktopSettings};

use crate::error::Result;
use crate::parse::parse_font_name;
use crate::scale::ScaleContext;
use crate::types::{FontDescription, ResolvedFont};

/// A rule set mapping desktop font preferences to a renderable font.
///
/// Implementations must not fail: on any detection or parse problem the
/// answer degrades to defaults (generic sans family, plain style, 10 points
/// at ratio 1) rather than propagating an error into UI startup.
pub trait FontPolicy {
    /// Resolve the control font for the current desktop.
    fn resolve_font_set(&self) -> ResolvedFont;
}

/// Resolve a parsed description against a scale context.
///
/// `pixel_size = size_points * ratio / native_scale`, rounded half-up and
/// clamped to a minimum of 1.
pub fn resolve(description: &FontDescription, context: &ScaleContext) -> ResolvedFont {
    let ratio = context.points_to_pixels_ratio();
    let scaled = description.size_points as f64 * ratio / context.native_scale();
    // f64-to-u32 casts saturate, so absurdly large point sizes pin to
    // u32::MAX instead of wrapping.
    let pixel_size = ((scaled + 0.5) as u32).max(1);

    let font = ResolvedFont {
        family: description.family.clone(),
        style: description.style(),
        pixel_size,
    };
    tracing::trace!(
        target: "velour_fontpolicy",
        font = %font,
        points = description.size_points,
        ratio,
        native_scale = context.native_scale(),
        "resolved font"
    );
    font
}

/// The stock font policy: desktop settings in, resolved font out.
#[derive(Debug, Clone)]
pub struct DesktopFontPolicy<S = DesktopProperties> {
    settings: S,
    context: ScaleContext,
}

impl DesktopFontPolicy<DesktopProperties> {
    /// Build a policy from the live desktop and the process-wide context.
    pub fn from_environment() -> Self {
        Self::new(DesktopProperties::detect(), *ScaleContext::global())
    }

    /// Like [`from_environment`](Self::from_environment), but reports why
    /// settings detection failed instead of degrading silently.
    pub fn try_from_environment() -> Result<Self> {
        let settings = DesktopProperties::try_detect()?;
        Ok(Self::new(settings, *ScaleContext::global()))
    }
}

impl<S: DesktopSettings> DesktopFontPolicy<S> {
    /// Create a policy over an explicit settings source and context.
    pub fn new(settings: S, context: ScaleContext) -> Self {
        Self { settings, context }
    }

    /// The scale context this policy resolves against.
    pub fn context(&self) -> &ScaleContext {
        &self.context
    }

    /// The settings source this policy reads from.
    pub fn settings(&self) -> &S {
        &self.settings
    }
}

impl<S: DesktopSettings> FontPolicy for DesktopFontPolicy<S> {
    fn resolve_font_set(&self) -> ResolvedFont {
        let description = match self.settings.font_name() {
            Some(name) => parse_font_name(&name),
            None => FontDescription::default(),
        };
        resolve(&description, &self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FontStyle, DEFAULT_SIZE_POINTS, GENERIC_FAMILY};

    struct FixedSettings {
        font_name: Option<&'static str>,
        xft_dpi: Option<i32>,
    }

    impl DesktopSettings for FixedSettings {
        fn font_name(&self) -> Option<String> {
            self.font_name.map(str::to_string)
        }

        fn xft_dpi(&self) -> Option<i32> {
            self.xft_dpi
        }
    }

    #[test]
    fn test_resolve_applies_dpi_ratio() {
        // 11pt at 96 DPI: 11 * 96/72 = 14.67 -> 15px.
        let context = ScaleContext::new(1.0, 1.0, Some(96 * 1024));
        let desc = FontDescription {
            family: "Sans".to_string(),
            bold: false,
            italic: false,
            size_points: 11,
        };
        assert_eq!(resolve(&desc, &context).pixel_size, 15);
    }

    #[test]
    fn test_resolve_divides_by_native_scale() {
        // 10pt at 192 DPI on a 2x native display: 10 * (192/72) / 2 = 13.33 -> 13px.
        let context = ScaleContext::new(1.0, 2.0, Some(192 * 1024));
        let desc = FontDescription::default();
        assert_eq!(resolve(&desc, &context).pixel_size, 13);
    }

    #[test]
    fn test_pixel_size_never_below_one() {
        // A tiny point size under heavy native scaling still yields 1px.
        let context = ScaleContext::new(1.0, 8.0, Some(50 * 1024));
        let desc = FontDescription {
            size_points: 1,
            ..FontDescription::default()
        };
        assert_eq!(resolve(&desc, &context).pixel_size, 1);

        let zero = FontDescription {
            size_points: 0,
            ..FontDescription::default()
        };
        assert_eq!(resolve(&zero, &context).pixel_size, 1);
    }

    #[test]
    fn test_huge_point_size_saturates() {
        // 2^30 points at ratio 4.0 lands exactly on 2^32; the pixel size
        // must saturate, not wrap to 0.
        let context = ScaleContext::new(1.0, 1.0, Some(288 * 1024));
        let desc = crate::parse::parse_font_name("Sans 1073741824");
        assert_eq!(desc.size_points, 1 << 30);
        let font = resolve(&desc, &context);
        assert!(font.pixel_size >= 1);
        assert_eq!(font.pixel_size, u32::MAX);

        // A neighbor just under the boundary must not wrap either.
        let near = FontDescription {
            size_points: (1 << 30) - 1,
            ..FontDescription::default()
        };
        assert!(resolve(&near, &context).pixel_size >= 1);
    }

    #[test]
    fn test_policy_parses_desktop_preference() {
        let settings = FixedSettings {
            font_name: Some("Cantarell Bold 11"),
            xft_dpi: Some(96 * 1024),
        };
        let context = ScaleContext::new(1.0, 1.0, settings.xft_dpi());
        let font = DesktopFontPolicy::new(settings, context).resolve_font_set();

        assert_eq!(font.family, "Cantarell");
        assert_eq!(font.style, FontStyle::BOLD);
        assert_eq!(font.pixel_size, 15);
    }

    #[test]
    fn test_policy_defaults_when_preference_absent() {
        let settings = FixedSettings {
            font_name: None,
            xft_dpi: None,
        };
        let font = DesktopFontPolicy::new(settings, ScaleContext::default()).resolve_font_set();

        assert_eq!(font.family, GENERIC_FAMILY);
        assert!(font.style.is_plain());
        assert_eq!(font.pixel_size, DEFAULT_SIZE_POINTS);
    }

    #[test]
    fn test_from_environment_never_panics() {
        let font = DesktopFontPolicy::from_environment().resolve_font_set();
        assert!(font.pixel_size >= 1);
        assert!(!font.family.is_empty());
    }
}
