// SPDX-License-Identifier: Apache-2.0

//! Rewrites strict `type="number"` inputs in TSX sources into free-text
//! inputs whose change handler only accepts numeric text.

mod config;
mod driver;
mod field;
mod kind;
mod rewrite;
mod scan;

pub use config::{DEFAULT_FILES, FixConfig};
pub use driver::{FileOutcome, Summary, fix_file, run, run_to_stdout};
pub use field::{FieldMatch, strip_attributes};
pub use kind::NumericKind;
pub use rewrite::{Rewrite, fix_float_inputs, fix_integer_inputs, fix_numeric_inputs, rewrite};
pub use scan::Depth;
