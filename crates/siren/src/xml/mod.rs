//! XML tree, formatter and the advisory validation pass.
//!
//! Documents are assembled as an explicit tree of [`Element`]s and only turned
//! into text by the [`XmlFormatter`]. The serialized text can then be checked
//! with [`validate`](validate::validate), which reports problems as
//! [`Diagnostic`]s without ever rejecting the document.

use super::*;

pub mod node;
pub mod validate;
pub mod writer;

pub use node::{DocType, Element, SirenDocument};
pub use validate::{render_report, validate, Diagnostic, Severity, Validation};
pub use writer::XmlFormatter;
