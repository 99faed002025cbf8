//! The `check` command: parse many files and report every error.

use std::io::Write;

use esh_diagnostic::emitter::TerminalEmitter;
use esh_diagnostic::Errors;
use esh_parse::{parse, Config};
use rayon::prelude::*;
use tracing::debug;

use super::{read_source, CliError};

/// Outcome of checking one file.
#[derive(Debug)]
pub enum CheckReport {
    Clean,
    Failed(Errors),
    Unreadable(CliError),
}

/// Parse every file in parallel, then write reports in argument order.
///
/// Returns how many files were unreadable or had errors.
pub fn check_files<W: Write>(paths: &[String], emitter: &mut TerminalEmitter<W>) -> usize {
    let reports: Vec<CheckReport> = paths
        .par_iter()
        .map(|path| match read_source(path) {
            Ok(src) => match parse(src, Config::default()).error() {
                None => CheckReport::Clean,
                Some(errors) => CheckReport::Failed(errors),
            },
            Err(e) => CheckReport::Unreadable(e),
        })
        .collect();

    let mut failed = 0;
    for (path, report) in paths.iter().zip(&reports) {
        debug!(path = %path, ok = matches!(report, CheckReport::Clean), "checked");
        match report {
            CheckReport::Clean => {}
            CheckReport::Failed(errors) => {
                emitter.emit_all(errors);
                failed += 1;
            }
            CheckReport::Unreadable(e) => {
                emitter.emit_message(&e.to_string());
                failed += 1;
            }
        }
    }
    emitter.flush();
    failed
}
