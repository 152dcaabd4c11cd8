use std::collections::BTreeMap;

use crate::error::FleetError;

use super::target::{Target, TargetId, normalize_key};

/// Addresses the dashboard starts with when nothing is configured.
pub const DEFAULT_TARGETS: [&str; 3] = ["192.168.1.1", "192.168.1.2", "192.168.1.3"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    EntryPoint,
    Target(TargetId),
    ServiceSink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
}

/// Counter movement observed while applying a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountChange {
    pub id: TargetId,
    pub previous: u64,
    pub current: u64,
}

impl CountChange {
    #[must_use]
    pub const fn delta(&self) -> u64 {
        self.current.saturating_sub(self.previous)
    }
}

/// Fleet topology: entry point, targets, service sink.
///
/// Targets are only ever appended; the balancer owns the counters and the
/// fleet mirrors whatever the last snapshot reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    targets: Vec<Target>,
    edges: Vec<Edge>,
}

impl Fleet {
    /// Builds a fleet from an initial id list.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTarget` when the list repeats an id.
    pub fn with_targets<I>(ids: I) -> Result<Self, FleetError>
    where
        I: IntoIterator<Item = TargetId>,
    {
        let mut fleet = Fleet::default();
        for id in ids {
            fleet.add_target(id)?;
        }
        Ok(fleet)
    }

    /// Appends a target wired between the entry point and the sink.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTarget` when the id is already present.
    pub fn add_target(&mut self, id: TargetId) -> Result<(), FleetError> {
        if self.contains(&id) {
            return Err(FleetError::DuplicateTarget {
                id: id.as_str().to_owned(),
            });
        }
        self.edges.push(Edge {
            from: Node::EntryPoint,
            to: Node::Target(id.clone()),
        });
        self.edges.push(Edge {
            from: Node::Target(id.clone()),
            to: Node::ServiceSink,
        });
        self.targets.push(Target::new(id));
        Ok(())
    }

    /// Mirrors a balancer snapshot into the fleet and returns counter moves.
    ///
    /// Targets missing from `counts_by_id` keep their count. Ids in the
    /// snapshot that the fleet does not know are ignored.
    pub fn apply_stats_snapshot(
        &mut self,
        selected_id: &str,
        counts_by_id: &BTreeMap<String, u64>,
    ) -> Vec<CountChange> {
        let counts: BTreeMap<String, u64> = counts_by_id
            .iter()
            .map(|(key, count)| (normalize_key(key), *count))
            .collect();

        let mut changes = Vec::new();
        for target in &mut self.targets {
            if let Some(count) = counts.get(target.id.as_str()).copied() {
                if count != target.request_count {
                    changes.push(CountChange {
                        id: target.id.clone(),
                        previous: target.request_count,
                        current: count,
                    });
                }
                target.request_count = count;
            }
            target.is_last_selected = target.id.matches(selected_id);
        }
        changes
    }

    #[must_use]
    pub fn contains(&self, id: &TargetId) -> bool {
        self.targets.iter().any(|target| &target.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &TargetId) -> Option<&Target> {
        self.targets.iter().find(|target| &target.id == id)
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn ids(&self) -> impl Iterator<Item = &TargetId> {
        self.targets.iter().map(Target::id)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[must_use]
    pub fn total_requests(&self) -> u64 {
        self.targets
            .iter()
            .fold(0_u64, |acc, target| acc.saturating_add(target.request_count))
    }

    #[must_use]
    pub fn last_selected(&self) -> Option<&Target> {
        self.targets.iter().find(|target| target.is_last_selected)
    }
}
