//! Desktop environment font settings.
//!
//! This module reads the two desktop preferences the font policy consumes:
//! the font-name string (family, style keywords, and point size in one
//! space-separated value, e.g. `"Cantarell Bold 11"`) and the Xft DPI hint.
//!
//! The DPI hint keeps its XSETTINGS wire encoding: the actual DPI multiplied
//! by 1024, with `-1` meaning "present but unset". Decoding is deliberately
//! left to the consumer so that a snapshot round-trips the host value
//! unmodified.
//!
//! # Platform Notes
//!
//! - **Linux**: reads `org.gnome.desktop.interface` keys through the XDG
//!   Desktop Portal settings interface. The DPI hint is derived from
//!   `text-scaling-factor`, which is how GNOME itself publishes `Xft/DPI`
//!   (factor × 96 × 1024).
//! - **Windows / macOS**: the font-name preference is a freedesktop concept;
//!   these platforms report an empty snapshot and consumers fall back to
//!   their defaults.

use std::fmt;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for desktop settings detection.
#[derive(Debug)]
pub struct DetectError {
    kind: DetectErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)] // Some variants only used on certain platforms
enum DetectErrorKind {
    /// The settings portal could not be reached.
    PortalUnavailable,
    /// A settings key could not be read.
    ReadFailed,
    /// Platform has no desktop settings source.
    UnsupportedPlatform,
}

impl DetectError {
    #[allow(dead_code)]
    fn portal_unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: DetectErrorKind::PortalUnavailable,
            message: message.into(),
        }
    }

    #[allow(dead_code)]
    fn read_failed(message: impl Into<String>) -> Self {
        Self {
            kind: DetectErrorKind::ReadFailed,
            message: message.into(),
        }
    }

    #[allow(dead_code)]
    fn unsupported_platform(message: impl Into<String>) -> Self {
        Self {
            kind: DetectErrorKind::UnsupportedPlatform,
            message: message.into(),
        }
    }

    /// Returns `true` if this error indicates the platform has no desktop
    /// settings source at all.
    pub fn is_unsupported_platform(&self) -> bool {
        self.kind == DetectErrorKind::UnsupportedPlatform
    }
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DetectErrorKind::PortalUnavailable => {
                write!(f, "settings portal unavailable: {}", self.message)
            }
            DetectErrorKind::ReadFailed => {
                write!(f, "settings read failed: {}", self.message)
            }
            DetectErrorKind::UnsupportedPlatform => {
                write!(f, "unsupported platform: {}", self.message)
            }
        }
    }
}

impl std::error::Error for DetectError {}

// ============================================================================
// Desktop Settings
// ============================================================================

/// Source of desktop font preferences.
///
/// This is the seam between platform detection and font resolution: the
/// resolver only ever sees this trait, so tests and embedders can substitute
/// a fixed snapshot for the live desktop.
pub trait DesktopSettings {
    /// The desktop's font preference string, if one is set.
    fn font_name(&self) -> Option<String>;

    /// The raw Xft DPI hint (`dpi * 1024`, `-1` for unset), if present.
    fn xft_dpi(&self) -> Option<i32>;
}

/// A snapshot of host desktop font preferences.
///
/// Construct with [`DesktopProperties::detect`] for the live desktop, or
/// [`DesktopProperties::new`] for a fixed snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopProperties {
    font_name: Option<String>,
    xft_dpi: Option<i32>,
}

impl DesktopProperties {
    /// Create a snapshot from known values.
    pub fn new(font_name: Option<String>, xft_dpi: Option<i32>) -> Self {
        Self { font_name, xft_dpi }
    }

    /// An empty snapshot with no preferences set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read the host desktop's preferences.
    ///
    /// Never fails: any detection problem (no portal, missing keys,
    /// unsupported platform) degrades to an empty snapshot and is logged at
    /// debug level.
    pub fn detect() -> Self {
        match Self::try_detect() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::debug!(
                    target: "velour_platform",
                    error = %err,
                    "desktop settings unavailable, using empty snapshot"
                );
                Self::empty()
            }
        }
    }

    /// Read the host desktop's preferences, reporting detection failures.
    ///
    /// [`detect`](Self::detect) is the right call for production use; this
    /// variant exists for diagnostics, where knowing *why* detection failed
    /// matters.
    pub fn try_detect() -> Result<Self, DetectError> {
        detect_platform()
    }
}

impl DesktopSettings for DesktopProperties {
    fn font_name(&self) -> Option<String> {
        self.font_name.clone()
    }

    fn xft_dpi(&self) -> Option<i32> {
        self.xft_dpi
    }
}

// ============================================================================
// Linux Implementation
// ============================================================================

#[cfg(target_os = "linux")]
fn detect_platform() -> Result<DesktopProperties, DetectError> {
    pollster::block_on(async {
        use ashpd::desktop::settings::Settings;

        let settings = Settings::new().await.map_err(|e| {
            DetectError::portal_unavailable(format!("failed to connect to portal: {}", e))
        })?;

        let font_name: Option<String> = match settings
            .read::<String>("org.gnome.desktop.interface", "font-name")
            .await
        {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::debug!(
                    target: "velour_platform",
                    error = %e,
                    "font-name setting not available"
                );
                None
            }
        };

        // GNOME publishes Xft/DPI as text-scaling-factor * 96, and XSETTINGS
        // carries it pre-multiplied by 1024. Re-encode so consumers see the
        // same raw value an XSETTINGS client would.
        let xft_dpi: Option<i32> = match settings
            .read::<f64>("org.gnome.desktop.interface", "text-scaling-factor")
            .await
        {
            Ok(factor) if factor.is_finite() && factor > 0.0 => {
                Some((factor * 96.0 * 1024.0).round() as i32)
            }
            Ok(factor) => {
                tracing::debug!(
                    target: "velour_platform",
                    factor,
                    "ignoring out-of-range text-scaling-factor"
                );
                None
            }
            Err(e) => {
                tracing::debug!(
                    target: "velour_platform",
                    error = %e,
                    "text-scaling-factor setting not available"
                );
                None
            }
        };

        Ok(DesktopProperties { font_name, xft_dpi })
    })
}

#[cfg(not(target_os = "linux"))]
fn detect_platform() -> Result<DesktopProperties, DetectError> {
    Err(DetectError::unsupported_platform(
        "desktop font settings are only published on freedesktop platforms",
    ))
}

// ============================================================================
// Tests
// ============================================================================
