//! Source hierarchy - the data held by the tree store
//!
//! A forest of up to three levels:
//! - Level 1 nodes sit at the top of the forest
//! - Level 2 nodes are their direct children
//! - Level 3 nodes are leaves and never get children

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tree::TreeError;

/// Default cap on the number of top-level sources
pub const DEFAULT_MAX_SOURCES: u32 = 10;

/// Upper bound offered by the max-sources input
pub const MAX_SOURCES_LIMIT: u32 = 50;

// ============================================================================
// Identifiers and levels
// ============================================================================

/// Opaque, stable identifier of a source node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Depth tier of a node, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    /// Level of a direct child, or `None` for leaf-only nodes
    pub fn child(self) -> Option<Level> {
        match self {
            Level::One => Some(Level::Two),
            Level::Two => Some(Level::Three),
            Level::Three => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    /// Short badge shown next to a node ("L1", "L2", "L3")
    pub fn badge(self) -> String {
        format!("L{}", self.number())
    }

    pub fn can_have_children(self) -> bool {
        self.child().is_some()
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            other => Err(format!("level must be 1, 2 or 3 (got {})", other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// A node in the source hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNode {
    pub id: SourceId,
    pub name: String,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<SourceId>,
    /// Insertion order is display order
    #[serde(default)]
    pub children: Vec<SourceNode>,
}

impl SourceNode {
    /// Create a top-level node
    pub fn root(id: impl Into<SourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: Level::One,
            parent_id: None,
            children: Vec::new(),
        }
    }

    /// Create a child of `parent` one level below it
    ///
    /// Returns `None` if the parent is a leaf-only node.
    pub fn child_of(
        parent: &SourceNode,
        id: impl Into<SourceId>,
        name: impl Into<String>,
    ) -> Option<Self> {
        Some(Self {
            id: id.into(),
            name: name.into(),
            level: parent.level.child()?,
            parent_id: Some(parent.id.clone()),
            children: Vec::new(),
        })
    }

    /// Builder-style helper for constructing fixtures
    pub fn with_children(mut self, children: Vec<SourceNode>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(SourceNode::subtree_size)
            .sum::<usize>()
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Forest
// ============================================================================

/// The ordered sequence of top-level nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest(Vec<SourceNode>);

impl Forest {
    pub fn new(roots: Vec<SourceNode>) -> Self {
        Self(roots)
    }

    pub fn roots(&self) -> &[SourceNode] {
        &self.0
    }

    pub fn into_roots(self) -> Vec<SourceNode> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of level-1 nodes (what the max-sources cap counts)
    pub fn root_count(&self) -> usize {
        self.0.len()
    }

    /// Number of nodes across all levels
    pub fn node_count(&self) -> usize {
        self.0.iter().map(SourceNode::subtree_size).sum()
    }

    /// Depth-first search for a node anywhere in the forest
    pub fn find(&self, id: &SourceId) -> Option<&SourceNode> {
        fn find_in<'a>(nodes: &'a [SourceNode], id: &SourceId) -> Option<&'a SourceNode> {
            for node in nodes {
                if &node.id == id {
                    return Some(node);
                }
                if let Some(found) = find_in(&node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        find_in(&self.0, id)
    }

    pub fn contains(&self, id: &SourceId) -> bool {
        self.find(id).is_some()
    }

    /// Zero-based nesting depth of a node (0 for roots)
    pub fn depth_of(&self, id: &SourceId) -> Option<usize> {
        self.iter()
            .find(|(_, node)| &node.id == id)
            .map(|(depth, _)| depth)
    }

    /// Pre-order iterator yielding `(depth, node)` pairs
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: self.0.iter().rev().map(|node| (0, node)).collect(),
        }
    }

    /// All ids in display order
    pub fn ids(&self) -> Vec<SourceId> {
        self.iter().map(|(_, node)| node.id.clone()).collect()
    }

    /// Check every structural invariant of the hierarchy
    ///
    /// Returns the first violation found in pre-order.
    pub fn validate(&self) -> Result<(), TreeError> {
        let mut seen = HashSet::new();
        for root in &self.0 {
            validate_node(root, None, &mut seen)?;
        }
        Ok(())
    }
}

fn validate_node<'a>(
    node: &'a SourceNode,
    parent: Option<&SourceNode>,
    seen: &mut HashSet<&'a SourceId>,
) -> Result<(), TreeError> {
    if node.id.as_str().is_empty() {
        return Err(TreeError::EmptyId);
    }
    if !seen.insert(&node.id) {
        return Err(TreeError::DuplicateId(node.id.clone()));
    }
    if node.name.trim().is_empty() {
        return Err(TreeError::EmptyName);
    }

    match parent {
        None => {
            if node.level != Level::One {
                return Err(TreeError::InvalidLevelChain(node.id.clone()));
            }
            if node.parent_id.is_some() {
                return Err(TreeError::InvalidParent(node.id.clone()));
            }
        }
        Some(parent) => {
            if parent.level.child() != Some(node.level) {
                return Err(TreeError::InvalidLevelChain(node.id.clone()));
            }
            if node.parent_id.as_ref() != Some(&parent.id) {
                return Err(TreeError::InvalidParent(node.id.clone()));
            }
        }
    }

    for child in &node.children {
        validate_node(child, Some(node), seen)?;
    }
    Ok(())
}

impl From<Vec<SourceNode>> for Forest {
    fn from(roots: Vec<SourceNode>) -> Self {
        Self(roots)
    }
}

/// Pre-order traversal over a forest
pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a SourceNode)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a SourceNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

// ============================================================================
// Source configuration
// ============================================================================

/// The complete in-memory state: the forest plus the root cap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    #[serde(default = "default_max_sources")]
    pub max_sources: u32,
    #[serde(default)]
    pub sources: Forest,
}

fn default_max_sources() -> u32 {
    DEFAULT_MAX_SOURCES
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            max_sources: DEFAULT_MAX_SOURCES,
            sources: Forest::default(),
        }
    }
}

impl SourceConfig {
    /// Demo hierarchy shown when no seed file is given
    pub fn demo() -> Self {
        let docs = SourceNode::root("source-1", "Documentation");
        let api = SourceNode {
            id: "source-1-1".into(),
            name: "API Docs".into(),
            level: Level::Two,
            parent_id: Some(docs.id.clone()),
            children: vec![
                leaf("source-1-1-1", "REST API", "source-1-1"),
                leaf("source-1-1-2", "GraphQL API", "source-1-1"),
            ],
        };
        let guides = level_two("source-1-2", "User Guides", "source-1");

        let kb = SourceNode::root("source-2", "Knowledge Base").with_children(vec![
            level_two("source-2-1", "FAQs", "source-2"),
            level_two("source-2-2", "Troubleshooting", "source-2"),
        ]);

        Self {
            max_sources: DEFAULT_MAX_SOURCES,
            sources: Forest::new(vec![
                docs.with_children(vec![api, guides]),
                kb,
                SourceNode::root("source-3", "Support Tickets"),
            ]),
        }
    }
}

fn level_two(id: &str, name: &str, parent: &str) -> SourceNode {
    SourceNode {
        id: id.into(),
        name: name.into(),
        level: Level::Two,
        parent_id: Some(parent.into()),
        children: Vec::new(),
    }
}

fn leaf(id: &str, name: &str, parent: &str) -> SourceNode {
    SourceNode {
        id: id.into(),
        name: name.into(),
        level: Level::Three,
        parent_id: Some(parent.into()),
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_seed_is_valid() {
        let config = SourceConfig::demo();
        assert!(config.sources.validate().is_ok());
        assert_eq!(config.sources.root_count(), 3);
        assert_eq!(config.sources.node_count(), 9);
    }

    #[test]
    fn test_depth_first_order() {
        let config = SourceConfig::demo();
        let names: Vec<&str> = config
            .sources
            .iter()
            .map(|(_, node)| node.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Documentation",
                "API Docs",
                "REST API",
                "GraphQL API",
                "User Guides",
                "Knowledge Base",
                "FAQs",
                "Troubleshooting",
                "Support Tickets",
            ]
        );
    }

    #[test]
    fn test_depth_of() {
        let forest = SourceConfig::demo().sources;
        assert_eq!(forest.depth_of(&"source-1".into()), Some(0));
        assert_eq!(forest.depth_of(&"source-1-1".into()), Some(1));
        assert_eq!(forest.depth_of(&"source-1-1-2".into()), Some(2));
        assert_eq!(forest.depth_of(&"missing".into()), None);
    }

    #[test]
    fn test_level_child_chain() {
        assert_eq!(Level::One.child(), Some(Level::Two));
        assert_eq!(Level::Two.child(), Some(Level::Three));
        assert_eq!(Level::Three.child(), None);
        assert!(Level::try_from(4).is_err());
        assert!(Level::try_from(0).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let forest = Forest::new(vec![
            SourceNode::root("a", "First"),
            SourceNode::root("a", "Second"),
        ]);
        assert_eq!(forest.validate(), Err(TreeError::DuplicateId("a".into())));
    }

    #[test]
    fn test_validate_rejects_broken_level_chain() {
        let mut child = level_two("b", "Child", "a");
        child.level = Level::Three;
        let forest = Forest::new(vec![SourceNode::root("a", "Root").with_children(vec![child])]);
        assert_eq!(
            forest.validate(),
            Err(TreeError::InvalidLevelChain("b".into()))
        );
    }

    #[test]
    fn test_validate_rejects_wrong_parent_id() {
        let child = level_two("b", "Child", "elsewhere");
        let forest = Forest::new(vec![SourceNode::root("a", "Root").with_children(vec![child])]);
        assert_eq!(forest.validate(), Err(TreeError::InvalidParent("b".into())));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let forest = Forest::new(vec![SourceNode::root("a", "   ")]);
        assert_eq!(forest.validate(), Err(TreeError::EmptyName));
    }

    #[test]
    fn test_config_json_shape() {
        let config = SourceConfig {
            max_sources: 4,
            sources: Forest::new(vec![SourceNode::root("x", "Only")]),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["maxSources"], 4);
        assert_eq!(json["sources"][0]["level"], 1);
        assert!(json["sources"][0].get("parentId").is_none());
    }
}
