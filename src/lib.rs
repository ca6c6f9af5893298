//! # htmlscrub
//!
//! Allow-list HTML sanitization for untrusted rich-text content.
//!
//! ## Features
//!
//! - ✅ **Tree-walking sanitization** - Disallowed elements demote to plain text, content is never lost
//! - ✅ **Attribute allow-lists** - Per-tag attribute tables, `on*` handlers always stripped
//! - ✅ **Style filtering** - Inline `style` declarations filtered property by property
//! - ✅ **URI scheme blocking** - `javascript:`/`data:` links neutralized
//! - ✅ **Panic-proof boundary** - Any internal failure degrades to a tag-strip fallback
//! - ✅ **Pattern Screening** - Cheap regex detection of XSS payloads
//!
//! ## Quick Start
//!
//! ```rust
//! let clean = htmlscrub::sanitize("<p>Hello</p><script>alert('XSS')</script>");
//!
//! // The script element is gone; its content survives as inert text.
//! assert_eq!(clean, "<p>Hello</p>alert('XSS')");
//! ```
//!
//! ## Sanitization
//!
//! The policy is fixed: there is no configuration surface, and the output
//! contains only allow-listed tags, attributes and style properties.
//!
//! ```rust
//! use htmlscrub::sanitize;
//!
//! // Safe rich text passes through structurally untouched
//! let safe = "<p><strong>Hello</strong> <em>world</em></p>";
//! assert_eq!(sanitize(safe), safe);
//!
//! // Script-capable URI schemes are removed outright
//! assert_eq!(
//!     sanitize(r#"<a href="javascript:alert(1)">Click</a>"#),
//!     "<a>Click</a>",
//! );
//!
//! // Style declarations are individually allow-listed
//! assert_eq!(
//!     sanitize(r#"<p style="color:red;position:fixed">x</p>"#),
//!     r#"<p style="color: red">x</p>"#,
//! );
//! ```
//!
//! ## Tag stripping
//!
//! The fallback pass is exported on its own for plain-text previews:
//!
//! ```rust
//! assert_eq!(htmlscrub::strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
//! ```
//!
//! ## Pattern Screening
//!
//! ```rust
//! use htmlscrub::AttackDetector;
//!
//! assert!(AttackDetector::looks_malicious("<script>alert(1)</script>"));
//! assert!(AttackDetector::looks_malicious("<img src=x onerror=alert(1)>"));
//! assert!(!AttackDetector::looks_malicious("<p>Hello World</p>"));
//! ```

pub mod detector;
pub mod error;
pub mod escape;
mod policy;
pub mod sanitizer;
pub mod style;
mod tree;

pub use detector::AttackDetector;
pub use error::{Result, ScrubError};
pub use escape::{escape_attribute, escape_text};
pub use sanitizer::{sanitize, strip_tags};
pub use style::filter_style;
