// SPDX-License-Identifier: Apache-2.0

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

/// The numeric conversion applied by an input's change handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericKind {
    /// Whole numbers, converted with `parseInt`.
    Integer,
    /// Decimal numbers, converted with `parseFloat`.
    Float,
}

static INTEGER_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| build_declaration_regex(NumericKind::Integer));
static FLOAT_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| build_declaration_regex(NumericKind::Float));
static INTEGER_ATTRIBUTES: LazyLock<Regex> =
    LazyLock::new(|| build_attribute_regex(NumericKind::Integer));
static FLOAT_ATTRIBUTES: LazyLock<Regex> =
    LazyLock::new(|| build_attribute_regex(NumericKind::Float));

impl NumericKind {
    /// Returns the name of the JavaScript function that parses this kind.
    pub fn parse_fn(&self) -> &'static str {
        match self {
            NumericKind::Integer => "parseInt",
            NumericKind::Float => "parseFloat",
        }
    }

    /// Returns the JavaScript regex literal that accepts a partially typed
    /// value of this kind.
    pub fn validator(&self) -> &'static str {
        match self {
            NumericKind::Integer => r"/^\d+$/",
            NumericKind::Float => r"/^\d*\.?\d*$/",
        }
    }

    /// Returns the attributes removed from a rewritten element.
    pub fn stripped_attributes(&self) -> &'static [&'static str] {
        match self {
            NumericKind::Integer => &["min", "max"],
            NumericKind::Float => &["min", "max", "step"],
        }
    }

    /// Returns the lowercase name used in log messages.
    pub fn label(&self) -> &'static str {
        match self {
            NumericKind::Integer => "integer",
            NumericKind::Float => "float",
        }
    }

    /// Matches an `<Input>` declaration with `type="number"` whose change
    /// handler stores `parseX(e.target.value)` into a single field.
    pub(crate) fn declaration_regex(&self) -> &'static Regex {
        match self {
            NumericKind::Integer => &INTEGER_DECLARATION,
            NumericKind::Float => &FLOAT_DECLARATION,
        }
    }

    /// Matches one stripped attribute together with the whitespace in front
    /// of it. The attribute must start the text or follow whitespace, so
    /// `data-min` and friends survive.
    pub(crate) fn attribute_regex(&self) -> &'static Regex {
        match self {
            NumericKind::Integer => &INTEGER_ATTRIBUTES,
            NumericKind::Float => &FLOAT_ATTRIBUTES,
        }
    }
}

fn build_declaration_regex(kind: NumericKind) -> Regex {
    let pattern = format!(
        concat!(
            r#"<Input(?P<before_type>\s+[^>]*?)type="number"(?P<after_type>[^>]*?)"#,
            r#"value=\{{(?P<value>[^}}]+)\}}(?P<after_value>[^>]*?)"#,
            r#"onChange=\{{\(e\)\s*=>\s*(?P<before_change>[^}}]+)\{{"#,
            r#"(?P<before_field>[^}}]*?)(?P<field>[^,\s]+):\s*{parse}\(e\.target\.value\)"#,
            r#"(?P<after_field>[^}}]*?)\}}\)"#,
        ),
        parse = kind.parse_fn(),
    );
    Regex::new(&pattern).expect("Failed to compile declaration regex")
}

fn build_attribute_regex(kind: NumericKind) -> Regex {
    let names = kind.stripped_attributes().iter().join("|");
    let pattern = format!(r#"(?:^|\s+)(?:{names})=(?:"[^"]*"|\{{[^{{}}]*\}})"#);
    Regex::new(&pattern).expect("Failed to compile attribute regex")
}
