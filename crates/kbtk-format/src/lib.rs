#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

Output formatting engine: classifies generated plain-text lines and renders
them as styled document elements inside (or after) a tagged region.
Use `kbtk-io` instead of depending on this crate directly.
"#]

pub mod classify;
pub mod render;
pub mod formatter;

pub use classify::{BulletKind, ClassifiedLine, LineBody, LineMarker, classify_line};
pub use formatter::{
    FormatError, RegionOutcome, format_output_response, format_output_response_at, header_line,
    jakarta_now, try_format_output_response, try_format_output_response_at,
};
pub use render::{RenderState, render_lines};
