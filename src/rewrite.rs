// SPDX-License-Identifier: Apache-2.0

use log::{debug, warn};
use regex::Captures;

use crate::{FieldMatch, NumericKind};

/// Result of one rewrite pass over a text blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// Number of declarations that were replaced.
    pub replaced: usize,
    /// Number of candidates left untouched because their captured pieces
    /// were not bracket-consistent.
    pub skipped: usize,
}

impl Rewrite {
    /// Returns `true` if at least one declaration was replaced.
    pub fn changed(&self) -> bool {
        self.replaced > 0
    }
}

/// Rewrites every numeric `<Input>` of the given kind in `text`. Text that
/// does not match is returned as-is.
pub fn rewrite(kind: NumericKind, text: &str) -> Rewrite {
    let mut replaced = 0;
    let mut skipped = 0;

    let result = kind
        .declaration_regex()
        .replace_all(text, |caps: &Captures| {
            let field_match = FieldMatch::from_captures(caps);
            if field_match.is_well_formed() {
                debug!(
                    "rewriting {} input bound to `{}`",
                    kind.label(),
                    field_match.field
                );
                replaced += 1;
                field_match.render(kind)
            } else {
                warn!(
                    "leaving {} input bound to `{}` untouched: unbalanced brackets in match",
                    kind.label(),
                    field_match.field
                );
                skipped += 1;
                caps[0].to_string()
            }
        })
        .into_owned();

    Rewrite {
        text: result,
        replaced,
        skipped,
    }
}

/// Converts `type="number"` inputs parsed with `parseInt` into free-text
/// inputs that only accept digits.
pub fn fix_integer_inputs(text: &str) -> String {
    rewrite(NumericKind::Integer, text).text
}

/// Converts `type="number"` inputs parsed with `parseFloat` into free-text
/// inputs that accept digits and an optional decimal point.
pub fn fix_float_inputs(text: &str) -> String {
    rewrite(NumericKind::Float, text).text
}

/// Applies the integer pass followed by the float pass.
pub fn fix_numeric_inputs(text: &str) -> String {
    fix_float_inputs(&fix_integer_inputs(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const JUMLAH: &str = r#"<Input type="number" min="0" value={form.jumlah} onChange={(e) => setForm({...form, jumlah: parseInt(e.target.value)})} />"#;

    const HARGA: &str = r#"
<Input
  id="harga"
  type="number"
  step="0.01"
  min="0"
  value={formData.harga_satuan}
  onChange={(e) => setFormData({ ...formData, harga_satuan: parseFloat(e.target.value) })}
/>
"#;

    #[test]
    fn test_integer_field() {
        let expected = concat!(
            r#"<Input type="text" inputMode="numeric" value={form.jumlah} onChange={(e) => {"#,
            "\n                    const value = e.target.value;",
            "\n                    if (value === \"\" || /^\\d+$/.test(value)) {",
            "\n                      setForm({...form, jumlah: value === \"\" ? 0 : parseInt(value)});",
            "\n                    }",
            "\n                  }} />",
        );

        let result = rewrite(NumericKind::Integer, JUMLAH);
        assert_eq!(result.text, expected);
        assert_eq!(result.replaced, 1);
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_float_field() {
        let result = rewrite(NumericKind::Float, HARGA);
        assert_eq!(result.replaced, 1);

        let expected = concat!(
            "\n<Input\n  id=\"harga\"\n  type=\"text\"\n  inputMode=\"numeric\" ",
            "value={formData.harga_satuan}\n  onChange={(e) => {",
            "\n                    const value = e.target.value;",
            "\n                    if (value === \"\" || /^\\d*\\.?\\d*$/.test(value)) {",
            "\n                      setFormData({ ...formData, harga_satuan: ",
            "value === \"\" ? 0 : parseFloat(value) });",
            "\n                    }",
            "\n                  }}\n/>\n",
        );
        assert_eq!(result.text, expected);
    }

    #[test]
    fn test_passes_are_kind_specific() {
        assert_eq!(fix_float_inputs(JUMLAH), JUMLAH);
        assert_eq!(fix_integer_inputs(HARGA), HARGA);
    }

    #[test]
    fn test_non_matching_text_is_unchanged() {
        let text = r#"<Input type="text" value={form.nama} onChange={(e) => setForm({...form, nama: e.target.value})} />"#;
        let result = rewrite(NumericKind::Integer, text);
        assert_eq!(result.text, text);
        assert!(!result.changed());
        assert_eq!(fix_numeric_inputs(""), "");
    }

    #[test]
    fn test_idempotent() {
        let source = format!("{JUMLAH}\n{HARGA}");
        let once = fix_numeric_inputs(&source);
        assert_ne!(once, source);
        assert_eq!(fix_numeric_inputs(&once), once);
    }
}
