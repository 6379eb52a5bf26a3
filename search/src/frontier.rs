//! Breadth-first frontier with first-discovery bookkeeping.
//!
//! One `LevelFrontier` is owned by exactly one k attempt and dropped when the
//! attempt resolves. It holds:
//! - a FIFO queue of configurations pending expansion
//! - a visited map: configuration → discovery record (predecessor + action)
//!
//! The root configuration is visited from the start and has no discovery
//! record. A configuration is recorded at most once; later arrivals are
//! suppressed, which keeps the BFS depth minimal and the enumeration-order
//! tie-break stable.

use std::collections::{HashMap, VecDeque};

use decontam_kernel::carrier::config::{ActionV1, ConfigurationV1};

/// How a configuration was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryV1 {
    pub predecessor: ConfigurationV1,
    pub action: ActionV1,
}

/// Per-attempt BFS state.
#[derive(Debug)]
pub struct LevelFrontier {
    queue: VecDeque<ConfigurationV1>,
    visited: HashMap<ConfigurationV1, Option<DiscoveryV1>>,
    root: ConfigurationV1,
    high_water: u64,
}

impl LevelFrontier {
    /// Create a frontier holding only `root`, already marked visited.
    #[must_use]
    pub fn new(root: ConfigurationV1) -> Self {
        let mut visited = HashMap::new();
        visited.insert(root, None);
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self {
            queue,
            visited,
            root,
            high_water: 1,
        }
    }

    /// The configuration the attempt started from.
    #[must_use]
    pub const fn root(&self) -> ConfigurationV1 {
        self.root
    }

    /// Dequeue the oldest pending configuration.
    pub fn pop(&mut self) -> Option<ConfigurationV1> {
        self.queue.pop_front()
    }

    /// Record `next` as reached from `predecessor` via `action` and enqueue it.
    ///
    /// Returns `false` (and changes nothing) if `next` was already visited.
    pub fn record(
        &mut self,
        next: ConfigurationV1,
        predecessor: ConfigurationV1,
        action: ActionV1,
    ) -> bool {
        if self.visited.contains_key(&next) {
            return false;
        }
        self.visited.insert(
            next,
            Some(DiscoveryV1 {
                predecessor,
                action,
            }),
        );
        self.queue.push_back(next);
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Whether `config` has been visited (root included).
    #[must_use]
    pub fn is_visited(&self, config: ConfigurationV1) -> bool {
        self.visited.contains_key(&config)
    }

    /// Discovery record of `config`; `None` for the root or unvisited configurations.
    #[must_use]
    pub fn discovery(&self, config: ConfigurationV1) -> Option<DiscoveryV1> {
        self.visited.get(&config).copied().flatten()
    }

    /// Number of visited configurations, root included.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Current queue length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of the queue length.
    #[must_use]
    pub const fn high_water(&self) -> u64 {
        self.high_water
    }
}
