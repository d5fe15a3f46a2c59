//! Dependency-driven rebuilds over a rule file and a file-time database
//!
//! Each requested target gets a depth-first traversal of the dependency
//! graph: pre-visit catches cycles, post-visit decides staleness once every
//! prerequisite is settled.

mod build;
mod fileinfo;
mod rules;

use std::path::Path;
use std::time::Instant;

use crate::error::{FringeError, Result};
use crate::trace_time;

pub use build::{build, BuildReport, DependencyGraph};
pub use fileinfo::FileInfo;
pub use rules::{Rule, RuleParser};

/// Read and parse a rule file from disk
pub fn load_rules(path: &Path) -> Result<Vec<Rule>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| FringeError::io_operation("read", path.display(), e))?;
    RuleParser::new()?.parse(&path.display().to_string(), &text)
}

/// Load both inputs and bring `targets` up to date
#[tracing::instrument(skip_all, fields(makefile = %makefile.display(), fileinfo = %fileinfo.display()))]
pub fn make(makefile: &Path, fileinfo: &Path, targets: &[String]) -> Result<BuildReport> {
    let start = Instant::now();
    let rules = load_rules(makefile)?;
    let info = FileInfo::load(fileinfo)?;
    trace_time!(start, "load_inputs");

    let deps = DependencyGraph::new(&rules, &info)?;
    let report = build(&deps, &info, targets)?;
    trace_time!(start, "build", commands = report.commands.len());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_make_from_files() {
        let dir = tempdir().unwrap();
        let makefile = dir.path().join("Makefile");
        let fileinfo = dir.path().join("fileinfo");
        fs::write(&makefile, "out: in\n\tcopy in out\n").unwrap();
        fs::write(&fileinfo, "20\nin 10\n").unwrap();

        let report = make(&makefile, &fileinfo, &[]).unwrap();
        assert_eq!(report.commands, vec!["\tcopy in out"]);
    }

    #[test]
    fn test_missing_makefile() {
        let dir = tempdir().unwrap();
        let err = make(&dir.path().join("Makefile"), &dir.path().join("fileinfo"), &[]).unwrap_err();
        assert!(matches!(err, FringeError::FailedOperationWithTarget { .. }));
    }
}
