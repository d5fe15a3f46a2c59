use std::collections::HashMap;

use regex::Regex;

use crate::bail_parse;
use crate::error::{FringeError, Result};

/// One target with its prerequisites and command lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub target: String,
    /// Prerequisite names, first-seen order, no duplicates
    pub prerequisites: Vec<String>,
    /// Command lines exactly as written, leading whitespace included
    pub commands: Vec<String>,
}

impl Rule {
    fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            prerequisites: Vec::new(),
            commands: Vec::new(),
        }
    }

    fn merge_prerequisites<'a>(&mut self, names: impl Iterator<Item = &'a str>) {
        for name in names {
            if !self.prerequisites.iter().any(|existing| existing == name) {
                self.prerequisites.push(name.to_string());
            }
        }
    }
}

/// Rule section currently being read
struct Section {
    rule: usize,
    line: usize,
    commands: Vec<String>,
}

/// Parser for rule files.
///
/// Format:
/// ```text
/// # comment
/// target: prereq1 prereq2
///     command line
///     another command line
/// ```
pub struct RuleParser {
    header: Regex,
}

impl RuleParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            header: Regex::new(r"^([^\s:=#]+):(.*)$")?,
        })
    }

    /// Parse rule file `text`; `source` names the file in error messages.
    ///
    /// Rules for the same target are merged in order of first appearance.
    pub fn parse(&self, source: &str, text: &str) -> Result<Vec<Rule>> {
        let mut rules: Vec<Rule> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut section: Option<Section> = None;

        for (offset, line) in text.lines().enumerate() {
            let line_no = offset + 1;
            if line.trim().is_empty() {
                continue;
            }

            if line.starts_with(char::is_whitespace) {
                match section.as_mut() {
                    Some(section) => section.commands.push(line.to_string()),
                    None => {
                        return Err(FringeError::parse(
                            source,
                            line_no,
                            "command line appears before any rule",
                        ))
                    }
                }
                continue;
            }

            if line.starts_with('#') {
                continue;
            }

            let Some(caps) = self.header.captures(line) else {
                bail_parse!(source, line_no, "expected `TARGET: PREREQUISITES`, found `{}`", line);
            };

            if let Some(done) = section.take() {
                close_section(source, &mut rules, done)?;
            }

            let target = &caps[1];
            let rule = *positions.entry(target.to_string()).or_insert_with(|| {
                rules.push(Rule::new(target));
                rules.len() - 1
            });
            rules[rule].merge_prerequisites(caps[2].split_whitespace());
            section = Some(Section {
                rule,
                line: line_no,
                commands: Vec::new(),
            });
        }

        if let Some(done) = section {
            close_section(source, &mut rules, done)?;
        }

        tracing::debug!(source, rules = rules.len(), "parsed rules");
        Ok(rules)
    }
}

fn close_section(source: &str, rules: &mut [Rule], section: Section) -> Result<()> {
    if section.commands.is_empty() {
        return Ok(());
    }
    let rule = &mut rules[section.rule];
    if !rule.commands.is_empty() {
        bail_parse!(source, section.line, "target `{}` has more than one command set", rule.target);
    }
    rule.commands = section.commands;
    Ok(())
}
