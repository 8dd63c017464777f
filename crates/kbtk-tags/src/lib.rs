#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

Tag vocabulary, input extraction and template insertion for the KBTK planner.
Use `kbtk-io` instead of depending on this crate directly.
"#]

pub mod vocab;
pub mod extract;
pub mod template;

pub use extract::{ExtractionError, MarkerSide, extract_between, extract_input};
pub use template::insert_all_templates;
pub use vocab::{ContentType, InputTag, OutputStyleOptions};
