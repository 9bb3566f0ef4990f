// SPDX-License-Identifier: Apache-2.0

/// Net bracket depth of a fragment of TSX text. String literals (single,
/// double and backtick quoted) and `//` / `/* */` comments are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Depth {
    pub parens: i32,
    pub braces: i32,
    pub brackets: i32,
    /// Set if any closing bracket appeared before its opener.
    pub underflow: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Comment {
    Line,
    Block,
}

impl Depth {
    /// Returns the depth of `text` after scanning it left to right.
    pub fn of(text: &str) -> Depth {
        let mut depth = Depth::default();
        let mut quote: Option<char> = None;
        let mut comment: Option<Comment> = None;
        let mut escaped = false;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if let Some(kind) = comment {
                match kind {
                    Comment::Line if c == '\n' => comment = None,
                    Comment::Block if c == '*' && chars.peek() == Some(&'/') => {
                        chars.next();
                        comment = None;
                    }
                    _ => {}
                }
                continue;
            }

            if let Some(q) = quote {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
                continue;
            }

            match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    comment = Some(Comment::Line);
                    continue;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    comment = Some(Comment::Block);
                    continue;
                }
                '"' | '\'' | '`' => quote = Some(c),
                '(' => depth.parens += 1,
                ')' => depth.parens -= 1,
                '{' => depth.braces += 1,
                '}' => depth.braces -= 1,
                '[' => depth.brackets += 1,
                ']' => depth.brackets -= 1,
                _ => continue,
            }

            if depth.parens < 0 || depth.braces < 0 || depth.brackets < 0 {
                depth.underflow = true;
            }
        }

        depth
    }

    /// Returns `true` if every bracket is closed in order.
    pub fn is_balanced(&self) -> bool {
        !self.underflow && self.parens == 0 && self.braces == 0 && self.brackets == 0
    }

    /// Returns `true` if the fragment is a call prefix such as `setForm(`:
    /// exactly one parenthesis left open and nothing else.
    pub fn opens_single_call(&self) -> bool {
        !self.underflow && self.parens == 1 && self.braces == 0 && self.brackets == 0
    }
}
