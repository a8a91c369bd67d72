use rustc_hash::FxHashSet;

use super::target::TargetId;

/// The set of targets the camera keeps in view.
///
/// Membership only: ids are unique, iteration order is unspecified, and
/// removing an id that is not present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: FxHashSet<TargetId>,
}

impl TargetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target. Returns `false` if it was already registered.
    pub fn add(&mut self, id: TargetId) -> bool {
        self.targets.insert(id)
    }

    /// Unregister a target. Returns `false` if it was not registered.
    pub fn remove(&mut self, id: TargetId) -> bool {
        self.targets.remove(&id)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: TargetId) -> bool {
        self.targets.contains(&id)
    }

    /// Number of registered targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no targets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Registered ids in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.targets.iter().copied()
    }

    /// Unregister everything.
    pub fn clear(&mut self) {
        self.targets.clear();
    }
}

impl Extend<TargetId> for TargetRegistry {
    fn extend<I: IntoIterator<Item = TargetId>>(&mut self, iter: I) {
        self.targets.extend(iter);
    }
}

impl FromIterator<TargetId> for TargetRegistry {
    fn from_iter<I: IntoIterator<Item = TargetId>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}
