//! Tree store - holds the single current forest and the root cap
//!
//! The forest is only ever replaced wholesale with the output of a
//! [`crate::tree`] operation.

use super::source::{Forest, Level, SourceConfig, SourceId, MAX_SOURCES_LIMIT};
use crate::tree::{self, TreeError};

/// Hands out fresh `source-<n>` ids
///
/// The counter only moves forward, so an id freed by a delete is never
/// handed out again during the session.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Start past every `source-<n>` id already present in `forest`
    pub fn seeded(forest: &Forest) -> Self {
        let next = forest
            .iter()
            .filter_map(|(_, node)| node.id.as_str().strip_prefix("source-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { next }
    }

    pub fn allocate(&mut self, forest: &Forest) -> SourceId {
        loop {
            self.next += 1;
            let candidate = SourceId::new(format!("source-{}", self.next));
            if !forest.contains(&candidate) {
                return candidate;
            }
        }
    }
}

/// In-memory store for the whole source configuration
#[derive(Debug, Clone, Default)]
pub struct SourceStore {
    config: SourceConfig,
    ids: IdAllocator,
}

impl SourceStore {
    /// Create a store from an already validated configuration
    pub fn new(config: SourceConfig) -> Self {
        let ids = IdAllocator::seeded(&config.sources);
        let mut store = Self { config, ids };
        let max = store.config.max_sources;
        store.set_max_sources(max);
        store
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    pub fn forest(&self) -> &Forest {
        &self.config.sources
    }

    pub fn max_sources(&self) -> u32 {
        self.config.max_sources
    }

    /// Whether another top-level source fits under the cap
    pub fn can_add_root(&self) -> bool {
        self.forest().root_count() < self.max_sources() as usize
    }

    fn replace_forest(&mut self, forest: Forest) {
        self.config.sources = forest;
    }

    /// Set the root cap, clamped to `1..=MAX_SOURCES_LIMIT`
    ///
    /// Lowering the cap never removes existing sources.
    pub fn set_max_sources(&mut self, max: u32) -> u32 {
        let clamped = max.clamp(1, MAX_SOURCES_LIMIT);
        if clamped != max {
            tracing::debug!(requested = max, clamped, "max sources clamped");
        }
        self.config.max_sources = clamped;
        clamped
    }

    /// Add a new source under `parent`, or at the top level when `None`
    ///
    /// Returns the id of the created node.
    pub fn add_source(&mut self, parent: Option<&SourceId>) -> Result<SourceId, TreeError> {
        let level = match parent {
            None => {
                if !self.can_add_root() {
                    return Err(TreeError::CapacityReached {
                        max: self.max_sources(),
                    });
                }
                Level::One
            }
            Some(parent_id) => {
                let node = self
                    .forest()
                    .find(parent_id)
                    .ok_or_else(|| TreeError::NotFound(parent_id.clone()))?;
                node.level
                    .child()
                    .ok_or_else(|| TreeError::LevelCapReached(parent_id.clone()))?
            }
        };

        let id = self.ids.allocate(&self.config.sources);
        let forest = tree::add(self.forest(), parent, level, id.clone())?;
        self.replace_forest(forest);
        Ok(id)
    }

    pub fn rename_source(&mut self, id: &SourceId, name: &str) -> Result<(), TreeError> {
        let forest = tree::rename(self.forest(), id, name)?;
        self.replace_forest(forest);
        Ok(())
    }

    pub fn delete_source(&mut self, id: &SourceId) -> Result<(), TreeError> {
        let forest = tree::delete(self.forest(), id)?;
        self.replace_forest(forest);
        Ok(())
    }
}
