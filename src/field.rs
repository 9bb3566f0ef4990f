// SPDX-License-Identifier: Apache-2.0

use regex::Captures;

use crate::NumericKind;
use crate::scan::Depth;

const BODY_INDENT: &str = "                    ";
const CLOSE_INDENT: &str = "                  ";

/// One located `<Input>` declaration, split into the pieces needed to
/// rebuild it. The pieces borrow from the scanned text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMatch<'t> {
    /// Whitespace and attributes between `<Input` and `type="number"`.
    pub before_type: &'t str,
    /// Attributes between `type="number"` and `value=`.
    pub after_type: &'t str,
    /// Expression bound to `value`.
    pub value: &'t str,
    /// Attributes between the value and `onChange=`.
    pub after_value: &'t str,
    /// The call that opens the state update, e.g. `setForm(`.
    pub before_change: &'t str,
    /// Object contents ahead of the assigned field, e.g. `...form, `.
    pub before_field: &'t str,
    pub field: &'t str,
    /// Object contents after the parsed value.
    pub after_field: &'t str,
}

impl<'t> FieldMatch<'t> {
    pub(crate) fn from_captures(caps: &Captures<'t>) -> FieldMatch<'t> {
        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());
        FieldMatch {
            before_type: group("before_type"),
            after_type: group("after_type"),
            value: group("value"),
            after_value: group("after_value"),
            before_change: group("before_change"),
            before_field: group("before_field"),
            field: group("field"),
            after_field: group("after_field"),
        }
    }

    /// Returns `true` if the captured pieces are bracket-consistent, i.e. the
    /// match did not stop inside a nested expression.
    pub fn is_well_formed(&self) -> bool {
        let assignment = format!("{}{}{}", self.before_field, self.field, self.after_field);
        Depth::of(self.value).is_balanced()
            && Depth::of(self.before_change).opens_single_call()
            && Depth::of(&assignment).is_balanced()
    }

    /// Returns the free-text replacement for this declaration. The text
    /// that followed the match in the source (the `}` closing `onChange`
    /// and the rest of the element) is not part of the result.
    pub fn render(&self, kind: NumericKind) -> String {
        format!(
            concat!(
                r#"<Input{before_type}type="text"{after_type}inputMode="numeric" "#,
                r#"value={{{value}}}{after_value}onChange={{(e) => {{"#,
                "\n{body}const value = e.target.value;",
                "\n{body}if (value === \"\" || {validator}.test(value)) {{",
                "\n{body}  {before_change}{{{before_field}{field}: ",
                "value === \"\" ? 0 : {parse}(value){after_field}}});",
                "\n{body}}}",
                "\n{close}}}",
            ),
            before_type = strip_attributes(self.before_type, kind),
            after_type = strip_attributes(self.after_type, kind),
            value = self.value,
            after_value = strip_attributes(self.after_value, kind),
            before_change = self.before_change,
            before_field = self.before_field,
            field = self.field,
            after_field = self.after_field,
            validator = kind.validator(),
            parse = kind.parse_fn(),
            body = BODY_INDENT,
            close = CLOSE_INDENT,
        )
    }
}

/// Removes every attribute that `kind` strips from an attribute region,
/// keeping the whitespace that separated it from the next attribute.
pub fn strip_attributes(text: &str, kind: NumericKind) -> String {
    kind.attribute_regex().replace_all(text, "").into_owned()
}
