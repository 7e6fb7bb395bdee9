//! Display scale metrics.
//!
//! Two distinct scale factors feed font resolution and they come from
//! different places:
//!
//! - the **logical scale** is the windowing toolkit's display transform
//!   (winit's [`MonitorHandle::scale_factor`]), and
//! - the **native scale** is the OS's own magnification setting, probed
//!   through a platform capability check that frequently comes back empty.
//!
//! Absence of the native-scale capability is a normal branch, not an error:
//! most configurations simply do not expose one, and consumers treat `None`
//! as a scale of 1.
//!
//! # Platform Notes
//!
//! - **macOS**: `NSScreen.backingScaleFactor` for the main screen (main
//!   thread only; probing from another thread reports no capability)
//! - **Windows**: `GetDpiForSystem() / 96`
//! - **Linux**: the `GDK_SCALE` environment variable, when set
//!
//! [`MonitorHandle::scale_factor`]: winit::monitor::MonitorHandle::scale_factor

use winit::monitor::MonitorHandle;

/// Scale factors for the display the UI renders on.
///
/// Computed once at startup; re-detection on display change is the
/// application's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    logical_scale: f64,
    native_scale: Option<f64>,
}

impl DisplayMetrics {
    /// Create metrics with a known logical scale and no native scale.
    pub fn new(logical_scale: f64) -> Self {
        Self {
            logical_scale,
            native_scale: None,
        }
    }

    /// Probe the host for display metrics.
    ///
    /// Without a toolkit monitor handle the logical scale defaults to 1.0;
    /// prefer [`from_monitor`](Self::from_monitor) once the windowing system
    /// is up.
    pub fn detect() -> Self {
        let native_scale = probe_native_scale();
        tracing::debug!(
            target: "velour_platform",
            native_scale = ?native_scale,
            "probed native display scale"
        );
        Self {
            logical_scale: 1.0,
            native_scale,
        }
    }

    /// Build metrics from a winit monitor, probing the native scale.
    pub fn from_monitor(monitor: &MonitorHandle) -> Self {
        Self {
            logical_scale: monitor.scale_factor(),
            native_scale: probe_native_scale(),
        }
    }

    /// Override the native scale (primarily for tests and embedders that
    /// already know it).
    pub fn with_native_scale(mut self, native_scale: f64) -> Self {
        self.native_scale = Some(native_scale);
        self
    }

    /// The windowing toolkit's logical scale factor.
    pub fn logical_scale(&self) -> f64 {
        self.logical_scale
    }

    /// The OS-reported native scale, if the platform exposes one.
    pub fn native_scale(&self) -> Option<f64> {
        self.native_scale
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

// ============================================================================
// Native Scale Probe
// ============================================================================

/// Probe the OS for its display magnification factor.
///
/// Returns `None` when the platform has no such API or the value could not
/// be read.
pub fn probe_native_scale() -> Option<f64> {
    probe_platform()
}

#[cfg(target_os = "linux")]
fn probe_platform() -> Option<f64> {
    let raw = std::env::var("GDK_SCALE").ok()?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|scale| scale.is_finite() && *scale > 0.0)
}

#[cfg(target_os = "macos")]
fn probe_platform() -> Option<f64> {
    use objc2::MainThreadMarker;
    use objc2_app_kit::NSScreen;

    let mtm = MainThreadMarker::new()?;
    let screen = NSScreen::mainScreen(mtm)?;
    Some(screen.backingScaleFactor())
}

#[cfg(target_os = "windows")]
fn probe_platform() -> Option<f64> {
    use windows::Win32::UI::HiDpi::GetDpiForSystem;

    // SAFETY: GetDpiForSystem takes no arguments and has no preconditions.
    let dpi = unsafe { GetDpiForSystem() };
    if dpi == 0 {
        None
    } else {
        Some(dpi as f64 / 96.0)
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn probe_platform() -> Option<f64> {
    None
}

// ============================================================================
// Tests
// ============================================================================
