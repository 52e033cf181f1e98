//! Pure operations over the source forest
//!
//! Every operation borrows the old forest and returns a new one. A rejected
//! operation returns an error and leaves nothing half-applied: the caller
//! still holds its untouched input.

use thiserror::Error;

use crate::model::source::{Forest, Level, SourceId, SourceNode};

/// Why an operation was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("no source with id '{0}'")]
    NotFound(SourceId),
    #[error("source name must not be empty")]
    EmptyName,
    #[error("source id must not be empty")]
    EmptyId,
    #[error("source '{0}' is at level 3 and cannot have children")]
    LevelCapReached(SourceId),
    #[error("expected a level {expected} node, got level {actual}")]
    LevelMismatch { expected: Level, actual: Level },
    #[error("source id '{0}' is already in use")]
    DuplicateId(SourceId),
    #[error("maximum of {max} top-level sources reached")]
    CapacityReached { max: u32 },
    #[error("source '{0}' does not sit one level below its parent")]
    InvalidLevelChain(SourceId),
    #[error("source '{0}' has a parent id that does not match its position")]
    InvalidParent(SourceId),
}

/// Coarse classification of a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The target id does not exist
    NotFound,
    /// The request itself is malformed or violates a constraint
    InvalidInput,
}

impl TreeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TreeError::NotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::InvalidInput,
        }
    }
}

/// Display name given to freshly created nodes
pub fn default_name(level: Level) -> String {
    format!("New Source L{}", level.number())
}

/// Append a new node
///
/// With no parent the node becomes the last level-1 node. Otherwise it is
/// appended to the children of `parent`, wherever that node sits.
pub fn add(
    forest: &Forest,
    parent: Option<&SourceId>,
    level: Level,
    id: SourceId,
) -> Result<Forest, TreeError> {
    if id.as_str().is_empty() {
        return Err(TreeError::EmptyId);
    }
    if forest.contains(&id) {
        return Err(TreeError::DuplicateId(id));
    }

    let Some(parent_id) = parent else {
        if level != Level::One {
            return Err(TreeError::LevelMismatch {
                expected: Level::One,
                actual: level,
            });
        }
        let mut roots = forest.roots().to_vec();
        roots.push(SourceNode::root(id, default_name(Level::One)));
        return Ok(Forest::new(roots));
    };

    let parent_node = forest
        .find(parent_id)
        .ok_or_else(|| TreeError::NotFound(parent_id.clone()))?;
    let expected = parent_node
        .level
        .child()
        .ok_or_else(|| TreeError::LevelCapReached(parent_id.clone()))?;
    if level != expected {
        return Err(TreeError::LevelMismatch {
            expected,
            actual: level,
        });
    }

    let child = SourceNode {
        id,
        name: default_name(level),
        level,
        parent_id: Some(parent_id.clone()),
        children: Vec::new(),
    };

    let mut child = Some(child);
    let roots = map_nodes(forest.roots(), &mut |node| {
        if &node.id == parent_id {
            if let Some(child) = child.take() {
                node.children.push(child);
            }
        }
    });
    Ok(Forest::new(roots))
}

/// Replace the name of a node, trimming surrounding whitespace
pub fn rename(forest: &Forest, id: &SourceId, new_name: &str) -> Result<Forest, TreeError> {
    let name = new_name.trim();
    if name.is_empty() {
        return Err(TreeError::EmptyName);
    }
    if !forest.contains(id) {
        return Err(TreeError::NotFound(id.clone()));
    }

    let roots = map_nodes(forest.roots(), &mut |node| {
        if &node.id == id {
            node.name = name.to_string();
        }
    });
    Ok(Forest::new(roots))
}

/// Remove a node together with its whole subtree
pub fn delete(forest: &Forest, id: &SourceId) -> Result<Forest, TreeError> {
    if !forest.contains(id) {
        return Err(TreeError::NotFound(id.clone()));
    }
    Ok(Forest::new(prune(forest.roots(), id)))
}

/// Copy a node list, letting `f` edit each copy after its children are copied
fn map_nodes(nodes: &[SourceNode], f: &mut impl FnMut(&mut SourceNode)) -> Vec<SourceNode> {
    nodes
        .iter()
        .map(|node| {
            let mut copy = SourceNode {
                children: map_nodes(&node.children, f),
                ..shallow(node)
            };
            f(&mut copy);
            copy
        })
        .collect()
}

fn prune(nodes: &[SourceNode], id: &SourceId) -> Vec<SourceNode> {
    nodes
        .iter()
        .filter(|node| &node.id != id)
        .map(|node| SourceNode {
            children: prune(&node.children, id),
            ..shallow(node)
        })
        .collect()
}

fn shallow(node: &SourceNode) -> SourceNode {
    SourceNode {
        id: node.id.clone(),
        name: node.name.clone(),
        level: node.level,
        parent_id: node.parent_id.clone(),
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::SourceConfig;

    fn demo() -> Forest {
        SourceConfig::demo().sources
    }

    #[test]
    fn test_add_root_appends_at_end() {
        let forest = demo();
        let next = add(&forest, None, Level::One, "new".into()).unwrap();
        assert_eq!(next.root_count(), 4);
        let last = next.roots().last().unwrap();
        assert_eq!(last.id, SourceId::new("new"));
        assert_eq!(last.name, "New Source L1");
        assert_eq!(last.parent_id, None);
    }

    #[test]
    fn test_add_child_appends_after_existing_children() {
        let forest = demo();
        let parent = SourceId::new("source-1");
        let next = add(&forest, Some(&parent), Level::Two, "new".into()).unwrap();
        let docs = next.find(&parent).unwrap();
        let names: Vec<&str> = docs.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["API Docs", "User Guides", "New Source L2"]);
        assert_eq!(docs.children[2].parent_id, Some(parent));
        assert_eq!(docs.children[2].level, Level::Two);
    }

    #[test]
    fn test_add_under_leaf_is_rejected() {
        let forest = demo();
        let leaf = SourceId::new("source-1-1-1");
        assert_eq!(
            add(&forest, Some(&leaf), Level::Three, "new".into()),
            Err(TreeError::LevelCapReached(leaf))
        );
    }

    #[test]
    fn test_add_with_wrong_level_is_rejected() {
        let forest = demo();
        let parent = SourceId::new("source-1");
        assert_eq!(
            add(&forest, Some(&parent), Level::Three, "new".into()),
            Err(TreeError::LevelMismatch {
                expected: Level::Two,
                actual: Level::Three
            })
        );
    }

    #[test]
    fn test_add_duplicate_id_is_rejected() {
        let forest = demo();
        assert_eq!(
            add(&forest, None, Level::One, "source-2".into()),
            Err(TreeError::DuplicateId("source-2".into()))
        );
    }

    #[test]
    fn test_rename_trims_name() {
        let forest = demo();
        let id = SourceId::new("source-2-1");
        let next = rename(&forest, &id, "  Questions  ").unwrap();
        assert_eq!(next.find(&id).unwrap().name, "Questions");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(TreeError::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(TreeError::EmptyName.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            TreeError::CapacityReached { max: 1 }.kind(),
            ErrorKind::InvalidInput
        );
    }
}
