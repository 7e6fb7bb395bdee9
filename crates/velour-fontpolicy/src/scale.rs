//! Scale context and point-to-pixel conversion.
//!
//! The scale context is computed once at startup and treated as immutable
//! for the process lifetime. It can be built explicitly and passed around
//! (preferred), or installed as the process-wide context via
//! [`ScaleContext::init_global`] for code paths that have no way to thread
//! it through.

use std::sync::OnceLock;

use velour_platform::{DesktopProperties, DesktopSettings, DisplayMetrics};

/// DPI assumed when the hint carries the unset sentinel.
pub const DEFAULT_DPI: i32 = 96;

/// Lower clamp for reported DPI values.
pub const MIN_DPI: i32 = 50;

/// Sentinel raw value meaning "DPI hint present but unset".
pub const UNSET_DPI: i32 = -1;

const POINTS_PER_INCH: f64 = 72.0;

static GLOBAL: OnceLock<ScaleContext> = OnceLock::new();

/// Immutable record of the display scaling inputs to font resolution.
///
/// Holds the toolkit's logical scale, the OS native scale (clamped to at
/// least 1), and the raw Xft DPI hint when one was present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleContext {
    logical_scale: f64,
    native_scale: f64,
    dpi: Option<i32>,
}

impl ScaleContext {
    /// Create a context from known values.
    ///
    /// Out-of-range inputs from misbehaving platform APIs are normalized
    /// here: a non-finite or non-positive logical scale becomes 1.0, and the
    /// native scale is clamped to a minimum of 1.0 before it is ever used as
    /// a divisor.
    pub fn new(logical_scale: f64, native_scale: f64, dpi: Option<i32>) -> Self {
        let logical_scale = if logical_scale.is_finite() && logical_scale > 0.0 {
            logical_scale
        } else {
            1.0
        };
        let native_scale = if native_scale.is_finite() {
            native_scale.max(1.0)
        } else {
            1.0
        };
        Self {
            logical_scale,
            native_scale,
            dpi,
        }
    }

    /// Build a context from detected platform inputs.
    ///
    /// A fractional native scale is rounded up to the next whole step before
    /// use. On configurations reporting 1.5 this shows fonts slightly larger
    /// than necessary, but it is still closer than ignoring the native
    /// scaling entirely; the rounding is deliberate and load-bearing.
    pub fn detect(settings: &dyn DesktopSettings, display: &DisplayMetrics) -> Self {
        let native_scale = display.native_scale().map_or(1.0, f64::ceil);
        let context = Self::new(display.logical_scale(), native_scale, settings.xft_dpi());
        tracing::debug!(
            target: "velour_fontpolicy",
            logical_scale = context.logical_scale,
            native_scale = context.native_scale,
            dpi = ?context.dpi,
            "detected scale context"
        );
        context
    }

    /// Install `context` as the process-wide scale context.
    ///
    /// Returns `false` if a global context was already set (the first write
    /// wins; later calls change nothing).
    pub fn init_global(context: ScaleContext) -> bool {
        GLOBAL.set(context).is_ok()
    }

    /// The process-wide scale context.
    ///
    /// Self-initializes from live detection on first use when
    /// [`init_global`](Self::init_global) was never called. Write-once,
    /// read-many: safe to call from any thread after initialization.
    pub fn global() -> &'static ScaleContext {
        GLOBAL.get_or_init(|| {
            Self::detect(&DesktopProperties::detect(), &DisplayMetrics::detect())
        })
    }

    /// The windowing toolkit's logical scale factor.
    pub fn logical_scale(&self) -> f64 {
        self.logical_scale
    }

    /// The OS native scale factor, always >= 1.
    pub fn native_scale(&self) -> f64 {
        self.native_scale
    }

    /// The raw Xft DPI hint (`dpi * 1024`), if one was present.
    pub fn dpi(&self) -> Option<i32> {
        self.dpi
    }

    /// The factor converting point sizes to pixel sizes.
    ///
    /// With a DPI hint present, the decoded DPI (sentinel `-1` treated as
    /// 96, clamped to at least [`MIN_DPI`]) divided by 72. Without one, the
    /// logical scale stands in for the ratio.
    pub fn points_to_pixels_ratio(&self) -> f64 {
        match self.dpi {
            Some(UNSET_DPI) => DEFAULT_DPI as f64 / POINTS_PER_INCH,
            Some(raw) => {
                let dpi = (raw / 1024).max(MIN_DPI);
                dpi as f64 / POINTS_PER_INCH
            }
            None => self.logical_scale,
        }
    }
}

impl Default for ScaleContext {
    /// A neutral context: no scaling, no DPI hint.
    fn default() -> Self {
        Self {
            logical_scale: 1.0,
            native_scale: 1.0,
            dpi: None,
        }
    }
}
