//! Document JSON loading with messages that point at the offending field.
//!
//! Elements are decoded one at a time so a bad element is reported by its
//! position instead of as a bare serde error against the whole file.

use std::fmt;

use kbtk_core::{Document, Element};
use serde_json::Value;

const ELEMENTS_FIELD: &str = "elements";

#[derive(Debug)]
pub enum DocumentJsonError {
    /// The input was not valid JSON.
    Syntax(serde_json::Error),
    /// Valid JSON whose root is not an object.
    NotAnObject,
    /// The root object has no `elements` field.
    MissingElements,
    /// `elements` is present but not an array.
    ElementsNotArray,
    /// One element does not match the element shape.
    InvalidElement { index: usize, source: serde_json::Error },
}

impl fmt::Display for DocumentJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentJsonError::Syntax(e) => write!(f, "Invalid JSON: {e}"),
            DocumentJsonError::NotAnObject => write!(
                f,
                "Invalid Document JSON shape: expected a JSON object. Required top-level fields: {ELEMENTS_FIELD}."
            ),
            DocumentJsonError::MissingElements => write!(
                f,
                "Invalid Document JSON: missing required top-level field(s): {ELEMENTS_FIELD}. Required top-level fields: {ELEMENTS_FIELD}."
            ),
            DocumentJsonError::ElementsNotArray => {
                write!(f, "Invalid Document JSON shape: `{ELEMENTS_FIELD}` must be an array.")
            }
            DocumentJsonError::InvalidElement { index, source } => {
                write!(f, "Invalid Document JSON: element {index}: {source}")
            }
        }
    }
}

impl std::error::Error for DocumentJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentJsonError::Syntax(e) | DocumentJsonError::InvalidElement { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

pub fn parse_document_json_str(s: &str) -> Result<Document, DocumentJsonError> {
    let root: Value = serde_json::from_str(s).map_err(DocumentJsonError::Syntax)?;
    let Value::Object(mut root) = root else {
        return Err(DocumentJsonError::NotAnObject);
    };

    let items = match root.remove(ELEMENTS_FIELD) {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(DocumentJsonError::ElementsNotArray),
        None => return Err(DocumentJsonError::MissingElements),
    };

    let elements = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Element>(item)
                .map_err(|source| DocumentJsonError::InvalidElement { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Document { elements })
}

/// Pretty JSON with a trailing newline.
pub fn to_document_json_string(doc: &Document) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    Ok(out)
}
