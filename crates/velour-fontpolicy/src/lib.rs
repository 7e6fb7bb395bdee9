//! Desktop font-policy resolution for Velour.
//!
//! A font policy maps the desktop environment's raw font preference (a
//! string like `"Cantarell Bold 11"`) and the host's DPI/scale hints into a
//! concrete, renderable font descriptor. This crate provides:
//!
//! - **Parsing**: token-by-token interpretation of the preference string
//! - **Scale context**: an immutable, process-wide record of the logical
//!   scale, native scale, and DPI hint, with the point-to-pixel conversion
//! - **Resolution**: the [`FontPolicy`] trait and the stock
//!   [`DesktopFontPolicy`] that theme engines consume
//!
//! Resolution never fails. Every missing or malformed input (no desktop
//! settings source, an unparsable size token, a misbehaving native-scale
//! API) degrades to a documented default, because a font-rendering
//! subsystem must not block application startup on a bad platform hint.
//!
//! # Example
//!
//! ```
//! use velour_fontpolicy::prelude::*;
//! use velour_platform::DesktopProperties;
//!
//! // A fixed snapshot; use DesktopProperties::detect() for the live desktop.
//! let settings = DesktopProperties::new(
//!     Some("Cantarell Bold 11".to_string()),
//!     Some(96 * 1024),
//! );
//! let context = ScaleContext::new(1.0, 1.0, settings.xft_dpi());
//!
//! let policy = DesktopFontPolicy::new(settings, context);
//! let font = policy.resolve_font_set();
//!
//! assert_eq!(font.family, "Cantarell");
//! assert!(font.style.is_bold());
//! assert!(font.pixel_size >= 1);
//! ```

pub mod parse;
pub mod policy;
pub mod scale;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::parse::parse_font_name;
    pub use crate::policy::{resolve, DesktopFontPolicy, FontPolicy};
    pub use crate::scale::ScaleContext;
    pub use crate::types::{FontDescription, FontStyle, ResolvedFont};
    pub use velour_platform::DesktopSettings;
}
