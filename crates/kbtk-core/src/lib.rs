#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the KBTK planner.

Do NOT depend on this crate directly.
Use `kbtk-io` instead.
"#]

pub mod model;
pub mod body;

pub use body::{BodyError, DocumentBody, TextLocator};
pub use model::{BoldRange, Document, Element, ElementKind, GlyphType, ParagraphHeading, TextAttributes};
