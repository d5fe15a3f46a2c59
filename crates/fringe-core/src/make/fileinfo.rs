use std::collections::HashMap;
use std::path::Path;

use crate::bail_parse;
use crate::error::{FringeError, Result};

/// File modification times plus the notional current time.
///
/// Format: the first non-blank line is the current time, every later
/// non-blank line is `NAME TIME`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfo {
    pub current_time: u64,
    times: HashMap<String, u64>,
}

impl FileInfo {
    /// Read and parse a file-info database from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FringeError::io_operation("read", path.display(), e))?;
        Self::parse(&path.display().to_string(), &text)
    }

    pub fn parse(source: &str, text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(offset, line)| (offset + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let Some((line_no, first)) = lines.next() else {
            return Err(FringeError::parse(source, 1, "missing current time"));
        };
        let current_time = first
            .parse()
            .map_err(|_| FringeError::parse(source, line_no, format!("invalid current time `{}`", first)))?;

        let mut times = HashMap::new();
        for (line_no, line) in lines {
            let mut fields = line.split_whitespace();
            let (Some(name), Some(time), None) = (fields.next(), fields.next(), fields.next()) else {
                bail_parse!(source, line_no, "expected `NAME TIME`, found `{}`", line);
            };
            let time = time
                .parse()
                .map_err(|_| FringeError::parse(source, line_no, format!("invalid time `{}`", time)))?;
            times.insert(name.to_string(), time);
        }

        Ok(Self {
            current_time,
            times,
        })
    }

    /// Last-modified time of `name`, if recorded
    pub fn time(&self, name: &str) -> Option<u64> {
        self.times.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.times.contains_key(name)
    }
}
