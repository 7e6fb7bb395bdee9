//! Host-environment queries for Velour.
//!
//! This crate reads the raw inputs a look-and-feel needs from the host
//! system and hands them over as plain data:
//!
//! - **Desktop settings**: the desktop environment's font preference string
//!   and Xft DPI hint, read once via the XDG Desktop Portal on Linux
//! - **Display metrics**: the windowing toolkit's logical scale factor plus
//!   an optional OS-reported native scale from a per-platform probe
//!
//! Detection is best-effort by design: a missing portal, an absent setting,
//! or an unsupported platform degrades to an empty snapshot rather than an
//! error. Consumers (notably `velour-fontpolicy`) must always be able to
//! produce a usable result from whatever subset of hints is available.
//!
//! # Example
//!
//! ```no_run
//! use velour_platform::{DesktopProperties, DesktopSettings, DisplayMetrics};
//!
//! let settings = DesktopProperties::detect();
//! let display = DisplayMetrics::detect();
//!
//! if let Some(name) = settings.font_name() {
//!     println!("desktop font preference: {}", name);
//! }
//! println!("logical scale: {}", display.logical_scale());
//! ```

pub mod desktop;
pub mod display;

pub use desktop::{DesktopProperties, DesktopSettings, DetectError};
pub use display::DisplayMetrics;
