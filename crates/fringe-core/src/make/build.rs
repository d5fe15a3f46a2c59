use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::bail_usage;
use crate::error::{FringeError, Result};
use crate::graph::{DirectedGraph, EdgeId, Graph, VertexId};
use crate::traversal::{Action, Outcome, Traversal, Visitor};

use super::fileinfo::FileInfo;
use super::rules::Rule;

type Deps = DirectedGraph<String, ()>;

/// Targets and files linked target -> prerequisite.
pub struct DependencyGraph {
    graph: Deps,
    index: HashMap<String, VertexId>,
    commands: HashMap<VertexId, Vec<String>>,
    default_target: Option<VertexId>,
}

impl DependencyGraph {
    /// Build the graph for `rules`, resolving prerequisites that are not
    /// themselves targets against `info`.
    pub fn new(rules: &[Rule], info: &FileInfo) -> Result<Self> {
        let mut graph = Deps::new();
        let mut index = HashMap::new();
        let mut commands = HashMap::new();

        for rule in rules {
            let vertex = graph.add_vertex(rule.target.clone());
            index.insert(rule.target.clone(), vertex);
            commands.insert(vertex, rule.commands.clone());
        }

        for rule in rules {
            let target = index[&rule.target];
            for prerequisite in &rule.prerequisites {
                let vertex = match index.get(prerequisite) {
                    Some(&vertex) => vertex,
                    None if info.contains(prerequisite) => {
                        let vertex = graph.add_vertex(prerequisite.clone());
                        index.insert(prerequisite.clone(), vertex);
                        vertex
                    }
                    None => {
                        return Err(FringeError::not_found(
                            "prerequisite",
                            format!("{} (needed by {})", prerequisite, rule.target),
                        ))
                    }
                };
                graph.add_edge(target, vertex, ());
            }
        }

        Ok(Self {
            default_target: rules.first().map(|rule| index[&rule.target]),
            graph,
            index,
            commands,
        })
    }

    pub fn graph(&self) -> &DirectedGraph<String, ()> {
        &self.graph
    }

    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Target of the first rule
    pub fn default_target(&self) -> Option<&str> {
        self.default_target
            .map(|vertex| self.graph.vertex_label(vertex).as_str())
    }

    fn commands(&self, vertex: VertexId) -> &[String] {
        self.commands.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// What a build did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Command lines run, in order
    pub commands: Vec<String>,
    /// Targets found out of date, in the order they were brought up to date
    pub rebuilt: Vec<String>,
}

/// Depth-first visitor deciding staleness on the way back up.
struct BuildVisitor<'a> {
    deps: &'a DependencyGraph,
    current_time: u64,
    times: HashMap<VertexId, u64>,
    in_progress: HashSet<VertexId>,
    report: BuildReport,
    cycle: Option<(VertexId, VertexId)>,
}

impl<'a> BuildVisitor<'a> {
    fn new(deps: &'a DependencyGraph, info: &FileInfo) -> Self {
        let times = deps
            .index
            .iter()
            .filter_map(|(name, &vertex)| info.time(name).map(|time| (vertex, time)))
            .collect();
        Self {
            deps,
            current_time: info.current_time,
            times,
            in_progress: HashSet::new(),
            report: BuildReport::default(),
            cycle: None,
        }
    }

    fn is_stale(&self, graph: &Deps, vertex: VertexId) -> bool {
        let Some(own) = self.times.get(&vertex).copied() else {
            return true;
        };
        graph
            .successors(vertex)
            .into_iter()
            .filter_map(|prerequisite| self.times.get(&prerequisite).copied())
            .any(|time| time > own)
    }
}

impl Visitor<Deps> for BuildVisitor<'_> {
    fn pre_visit(&mut self, graph: &Deps, edge: EdgeId, from: VertexId) -> Action {
        let prerequisite = graph.other_end(edge, from);
        let closes_cycle = graph
            .successors(prerequisite)
            .into_iter()
            .any(|next| self.in_progress.contains(&next));
        if closes_cycle {
            self.cycle = Some((from, prerequisite));
            return Action::Stop;
        }
        Action::Proceed
    }

    fn visit(&mut self, graph: &Deps, vertex: VertexId) -> Action {
        self.in_progress.insert(vertex);
        if graph.successors(vertex).contains(&vertex) {
            self.cycle = Some((vertex, vertex));
            return Action::Stop;
        }
        Action::Proceed
    }

    fn post_visit(&mut self, graph: &Deps, vertex: VertexId) -> Action {
        self.in_progress.remove(&vertex);
        if self.is_stale(graph, vertex) {
            let commands = self.deps.commands(vertex);
            tracing::debug!(name = %graph.vertex_label(vertex), commands = commands.len(), "rebuilding");
            self.report.commands.extend(commands.iter().cloned());
            self.report.rebuilt.push(graph.vertex_label(vertex).clone());
            self.times.insert(vertex, self.current_time);
        }
        Action::Proceed
    }
}

/// Bring each of `targets` up to date, or the first rule's target when
/// `targets` is empty.
///
/// Times refreshed while building one target are seen by the next.
pub fn build(deps: &DependencyGraph, info: &FileInfo, targets: &[String]) -> Result<BuildReport> {
    let requested: Vec<&str> = if targets.is_empty() {
        let Some(first) = deps.default_target() else {
            bail_usage!("no target given and no rules defined");
        };
        vec![first]
    } else {
        targets.iter().map(String::as_str).collect()
    };

    let starts = requested
        .iter()
        .map(|&name| {
            deps.vertex(name)
                .ok_or_else(|| FringeError::not_found("target", name))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut visitor = BuildVisitor::new(deps, info);
    for start in starts {
        let outcome = Traversal::new(&mut visitor).traverse_depth_first(deps.graph(), start);
        if outcome == Outcome::Paused {
            let (target, prerequisite) = visitor.cycle.unwrap_or((start, start));
            return Err(FringeError::Cycle {
                target: deps.graph().vertex_label(target).clone(),
                prerequisite: deps.graph().vertex_label(prerequisite).clone(),
            });
        }
    }

    Ok(visitor.report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make::RuleParser;

    fn plan(makefile: &str, fileinfo: &str, targets: &[&str]) -> Result<BuildReport> {
        let rules = RuleParser::new()?.parse("Makefile", makefile)?;
        let info = FileInfo::parse("fileinfo", fileinfo)?;
        let deps = DependencyGraph::new(&rules, &info)?;
        let targets: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
        build(&deps, &info, &targets)
    }

    const PROGRAM: &str = "\
prog: main.o util.o
\tcc -o prog main.o util.o
main.o: main.c
\tcc -c main.c
util.o: util.c
\tcc -c util.c
";

    #[test]
    fn test_stale_targets_rebuild_in_dependency_order() {
        let report = plan(PROGRAM, "100\nmain.c 50\nutil.c 60\n", &[]).unwrap();
        assert_eq!(
            report.commands,
            vec!["\tcc -c main.c", "\tcc -c util.c", "\tcc -o prog main.o util.o"]
        );
        assert_eq!(report.rebuilt, vec!["main.o", "util.o", "prog"]);
    }

    #[test]
    fn test_up_to_date_targets_are_skipped() {
        let report = plan(
            PROGRAM,
            "100\nmain.c 50\nutil.c 60\nmain.o 55\nutil.o 61\nprog 70\n",
            &[],
        )
        .unwrap();
        assert!(report.commands.is_empty());
    }

    #[test]
    fn test_newer_prerequisite_propagates() {
        let report = plan(
            PROGRAM,
            "100\nmain.c 90\nutil.c 60\nmain.o 55\nutil.o 61\nprog 70\n",
            &[],
        )
        .unwrap();
        assert_eq!(report.commands, vec!["\tcc -c main.c", "\tcc -o prog main.o util.o"]);
    }

    #[test]
    fn test_requested_targets_share_refreshed_times() {
        let report = plan(
            PROGRAM,
            "100\nmain.c 50\nutil.c 60\nutil.o 61\nprog 70\n",
            &["main.o", "prog"],
        )
        .unwrap();
        assert_eq!(report.commands, vec!["\tcc -c main.c", "\tcc -o prog main.o util.o"]);
    }

    #[test]
    fn test_stale_target_without_commands_is_silent() {
        let report = plan("all: a\na: src\n  make a\n", "10\nsrc 5\n", &["all"]).unwrap();
        assert_eq!(report.commands, vec!["  make a"]);
        assert_eq!(report.rebuilt, vec!["a", "all"]);
    }

    #[test]
    fn test_two_cycle_is_reported() {
        let err = plan("a: b\n  build a\nb: a\n  build b\n", "10\n", &[]).unwrap_err();
        assert!(matches!(err, FringeError::Cycle { .. }));
        assert_eq!(err.to_string(), "dependency cycle detected: a -> b");
    }

    #[test]
    fn test_longer_cycle_is_reported() {
        let err = plan("a: b\nb: c\nc: a\n", "10\n", &[]).unwrap_err();
        assert_eq!(err.to_string(), "dependency cycle detected: b -> c");
    }

    #[test]
    fn test_self_dependency_is_reported() {
        let err = plan("a: a\n  loop\n", "10\n", &[]).unwrap_err();
        assert_eq!(err.to_string(), "dependency cycle detected: a -> a");
    }

    #[test]
    fn test_shared_prerequisite_is_not_a_cycle() {
        let report = plan("top: left right\nleft: base\nright: base\nbase:\n  mk base\n", "5\n", &[])
            .unwrap();
        assert_eq!(report.commands, vec!["  mk base"]);
    }

    #[test]
    fn test_unknown_prerequisite_fails() {
        let err = plan("a: missing.c\n", "10\n", &[]).unwrap_err();
        assert!(matches!(err, FringeError::NotFound { .. }));
        assert!(err.to_string().contains("missing.c"));
    }

    #[test]
    fn test_unknown_target_fails() {
        let err = plan(PROGRAM, "10\nmain.c 1\nutil.c 1\n", &["nope"]).unwrap_err();
        assert_eq!(err.to_string(), "target not found: nope");
    }

    #[test]
    fn test_empty_makefile_without_targets_fails() {
        let err = plan("# nothing\n", "10\n", &[]).unwrap_err();
        assert!(matches!(err, FringeError::UsageError(_)));
    }
}
