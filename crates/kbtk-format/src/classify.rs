//! Stateless per-line classification of generated text.
//!
//! Markup vocabulary (matched on the trimmed line):
//! - `# ` heading-5 marker, `## ` / `### ` bold marker (stripped first)
//! - `•` level 0, `*` level 1, `a.`..`z.` level 1, `i.`/`ii.`/`iii.`... level 2
//! - `-` bullet at the current nesting level
//! - anything else is plain text; an empty line is a paragraph break

use once_cell::sync::Lazy;
use regex::Regex;

static ROMAN_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[i]+\.").expect("roman item regex"));
static LETTER_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]\.").expect("letter item regex"));

/// Line-level style marker found before bullet classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMarker {
    None,
    Heading5,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletKind {
    /// `•`
    Dot,
    /// `*`
    Star,
    /// `a.` .. `z.`
    Letter,
    /// `i.`, `ii.`, `iii.` (literal `i` runs only)
    Roman,
    /// `-`
    Dash,
}

impl BulletKind {
    /// Nesting level for this bullet given the level carried from previous lines.
    pub const fn level(self, current: u32) -> u32 {
        match self {
            BulletKind::Dot => 0,
            BulletKind::Star | BulletKind::Letter => 1,
            BulletKind::Roman => 2,
            BulletKind::Dash => current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBody<'a> {
    Blank,
    Bullet { kind: BulletKind, text: &'a str },
    Plain(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub marker: LineMarker,
    pub body: LineBody<'a>,
}

pub fn classify_line(line: &str) -> ClassifiedLine<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ClassifiedLine { marker: LineMarker::None, body: LineBody::Blank };
    }

    let (marker, processed) = if let Some(rest) = trimmed.strip_prefix("# ") {
        (LineMarker::Heading5, rest)
    } else if let Some(rest) = trimmed.strip_prefix("## ") {
        (LineMarker::Bold, rest)
    } else if let Some(rest) = trimmed.strip_prefix("### ") {
        (LineMarker::Bold, rest)
    } else {
        (LineMarker::None, trimmed)
    };

    ClassifiedLine { marker, body: classify_body(processed) }
}

fn bullet(kind: BulletKind, rest: &str) -> LineBody<'_> {
    LineBody::Bullet { kind, text: rest.trim() }
}

fn classify_body(text: &str) -> LineBody<'_> {
    if let Some(rest) = text.strip_prefix('•') {
        return bullet(BulletKind::Dot, rest);
    }
    if let Some(rest) = text.strip_prefix('*') {
        return bullet(BulletKind::Star, rest);
    }
    // `i.` is both a letter item and a roman item. Roman is checked before
    // letter so `i.`/`ii.` land on level 2; testing letter first would make
    // `i.` a level-1 item.
    if let Some(m) = ROMAN_ITEM.find(text) {
        return bullet(BulletKind::Roman, &text[m.end()..]);
    }
    if LETTER_ITEM.is_match(text) {
        return bullet(BulletKind::Letter, &text[2..]);
    }
    if let Some(rest) = text.strip_prefix('-') {
        return bullet(BulletKind::Dash, rest);
    }
    LineBody::Plain(text)
}
