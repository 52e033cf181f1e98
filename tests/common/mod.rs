//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use sourcefilter::commands::{Cmd, SourceListener};
use sourcefilter::messages::Msg;
use sourcefilter::model::{AppModel, Forest, Level, SourceConfig, SourceId, SourceNode};
use sourcefilter::update::update;

/// Demo hierarchy: Documentation / Knowledge Base / Support Tickets
pub fn test_model() -> AppModel {
    AppModel::new(SourceConfig::demo())
}

/// Model holding the given roots under the given cap
pub fn model_with(max_sources: u32, roots: Vec<SourceNode>) -> AppModel {
    AppModel::new(SourceConfig {
        max_sources,
        sources: Forest::new(roots),
    })
}

/// "Documentation" with two level-2 children, "API Docs" and "User Guides"
pub fn documentation_forest() -> Forest {
    let docs = SourceNode::root("docs", "Documentation");
    let api = SourceNode::child_of(&docs, "api", "API Docs").unwrap();
    let guides = SourceNode::child_of(&docs, "guides", "User Guides").unwrap();
    Forest::new(vec![docs.with_children(vec![api, guides])])
}

/// Create a childless node with an explicit level and parent
pub fn node(id: &str, name: &str, level: Level, parent: Option<&str>) -> SourceNode {
    SourceNode {
        id: SourceId::new(id),
        name: name.to_string(),
        level,
        parent_id: parent.map(SourceId::new),
        children: Vec::new(),
    }
}

/// Run a sequence of messages, returning the last command
pub fn apply(model: &mut AppModel, msgs: Vec<Msg>) -> Option<Cmd> {
    let mut last = None;
    for msg in msgs {
        last = update(model, msg);
    }
    last
}

/// Names of all nodes in display order
pub fn names(forest: &Forest) -> Vec<String> {
    forest.iter().map(|(_, n)| n.name.clone()).collect()
}

/// Listener that records every callback it receives
#[derive(Debug, Default)]
pub struct Recorder {
    pub selections: Vec<(String, String)>,
    pub forests: Vec<Forest>,
    pub maxes: Vec<u32>,
    pub rejections: usize,
}

impl SourceListener for Recorder {
    fn on_source_select(&mut self, id: &str, name: &str) {
        self.selections.push((id.to_string(), name.to_string()));
    }

    fn on_sources_change(&mut self, sources: &Forest) {
        self.forests.push(sources.clone());
    }

    fn on_max_sources_change(&mut self, max: u32) {
        self.maxes.push(max);
    }

    fn on_rejected(&mut self, _error: &sourcefilter::TreeError) {
        self.rejections += 1;
    }
}

/// Dispatch a message and forward its command to a recorder
pub fn dispatch(model: &mut AppModel, msg: Msg, recorder: &mut Recorder) -> Option<Cmd> {
    let cmd = update(model, msg);
    if let Some(cmd) = &cmd {
        cmd.dispatch(recorder);
    }
    cmd
}
