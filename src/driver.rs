// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::Path;

use indexmap::IndexMap;
use log::debug;

use crate::{FixConfig, NumericKind, rewrite};

/// What happened to one configured file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// The path does not exist; the file was skipped.
    NotFound,
    /// Nothing matched; the file was not written.
    Unchanged,
    /// The file was rewritten. Counts are per pass.
    Fixed { integer: usize, float: usize },
}

/// Outcomes of a run, keyed by configured path in processing order.
#[derive(Clone, Debug, Default)]
pub struct Summary {
    outcomes: IndexMap<String, FileOutcome>,
}

impl Summary {
    /// Returns every outcome, in processing order.
    pub fn outcomes(&self) -> &IndexMap<String, FileOutcome> {
        &self.outcomes
    }

    /// Returns the outcome for `file`, if it was listed.
    pub fn get(&self, file: &str) -> Option<FileOutcome> {
        self.outcomes.get(file).copied()
    }

    /// Returns the number of files that were rewritten.
    pub fn fixed(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Fixed { .. }))
    }

    /// Returns the number of files that needed no change.
    pub fn unchanged(&self) -> usize {
        self.count(|outcome| *outcome == FileOutcome::Unchanged)
    }

    /// Returns the number of files that were not found.
    pub fn missing(&self) -> usize {
        self.count(|outcome| *outcome == FileOutcome::NotFound)
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.values().filter(|o| predicate(o)).count()
    }
}

/// Reads the file at `path`, applies the integer pass then the float pass,
/// and writes the file back if its content changed.
pub fn fix_file(path: &Path) -> io::Result<FileOutcome> {
    let original = std::fs::read_to_string(path).map_err(|e| {
        io::Error::new(e.kind(), format!("reading file at path {path:?}: {e}"))
    })?;

    let integer = rewrite(NumericKind::Integer, &original);
    let float = rewrite(NumericKind::Float, &integer.text);
    debug!(
        "{}: {} integer and {} float inputs rewritten, {} skipped",
        path.display(),
        integer.replaced,
        float.replaced,
        integer.skipped + float.skipped
    );

    if float.text == original {
        return Ok(FileOutcome::Unchanged);
    }

    std::fs::write(path, &float.text).map_err(|e| {
        io::Error::new(e.kind(), format!("writing file at path {path:?}: {e}"))
    })?;

    Ok(FileOutcome::Fixed {
        integer: integer.replaced,
        float: float.replaced,
    })
}

/// Processes every file in `cfg`, writing status lines to `out`. A missing
/// file is reported and skipped; any other I/O error ends the run.
pub fn run(cfg: &FixConfig, out: &mut impl Write) -> io::Result<Summary> {
    let mut summary = Summary::default();

    writeln!(out, "Starting to fix numeric input fields...")?;
    for &file in cfg.files {
        if summary.outcomes.contains_key(file) {
            debug!("{file} is listed more than once; already processed");
            continue;
        }

        let path = cfg.resolve(file);
        if !path.exists() {
            writeln!(out, "⚠️  File not found: {file}")?;
            summary
                .outcomes
                .insert(file.to_string(), FileOutcome::NotFound);
            continue;
        }

        writeln!(out, "Processing: {file}")?;
        let outcome = fix_file(&path)?;
        match outcome {
            FileOutcome::Fixed { .. } => writeln!(out, "✅ Fixed: {file}")?,
            _ => writeln!(out, "ℹ️  No changes needed: {file}")?,
        }
        summary.outcomes.insert(file.to_string(), outcome);
    }
    writeln!(out, "\nDone! All files have been processed.")?;

    Ok(summary)
}

/// Same as [`run`], reporting to stdout.
pub fn run_to_stdout(cfg: &FixConfig) -> io::Result<Summary> {
    run(cfg, &mut io::stdout().lock())
}
