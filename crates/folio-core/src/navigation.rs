//! Linear "current section" state over a [`SectionRegistry`].
//!
//! Only the index is stored. The id and the next/previous guards are derived
//! from it on every read, so they cannot drift apart. All transitions return a
//! new value; boundaries are no-ops and never wrap.

use crate::sections::{InvalidRegistry, RegistryKind, Section, SectionRegistry};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavigationState {
    registry: SectionRegistry,
    current: u16,
}

impl NavigationState {
    /// Start at `preferred_id` when it belongs to `registry`, else at index 0.
    pub fn initialize(registry: SectionRegistry, preferred_id: Option<&str>) -> Self {
        let current = preferred_id
            .and_then(|id| registry.index_of(id))
            .unwrap_or(0);
        Self { registry, current }
    }

    pub fn from_ids(
        kind: RegistryKind,
        ids: &[&'static str],
        preferred_id: Option<&str>,
    ) -> Result<Self, InvalidRegistry> {
        let registry = SectionRegistry::new(kind, ids)?;
        Ok(Self::initialize(registry, preferred_id))
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn current_id(&self) -> &'static str {
        // `current` is always a valid index into a non-empty registry.
        self.registry.id_at(self.current).unwrap_or("")
    }

    pub const fn current_index(&self) -> u16 {
        self.current
    }

    pub fn current_section(&self) -> Section {
        Section {
            id: self.current_id(),
            index: self.current,
        }
    }

    pub fn can_next(&self) -> bool {
        self.current < self.registry.last_index()
    }

    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    pub fn len(&self) -> u16 {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    #[must_use]
    pub fn set_active(&self, section_id: &str) -> Self {
        match self.registry.index_of(section_id) {
            Some(index) => self.at(index),
            None => self.clone(),
        }
    }

    #[must_use]
    pub fn next(&self) -> Self {
        if !self.can_next() {
            return self.clone();
        }
        self.set_active(self.registry.id_at(self.current + 1).unwrap_or_default())
    }

    #[must_use]
    pub fn previous(&self) -> Self {
        if !self.can_prev() {
            return self.clone();
        }
        self.set_active(self.registry.id_at(self.current - 1).unwrap_or_default())
    }

    #[must_use]
    pub fn first(&self) -> Self {
        self.at(0)
    }

    #[must_use]
    pub fn last(&self) -> Self {
        self.at(self.registry.last_index())
    }

    /// Jump to a zero-based index; out-of-range indices leave the state as is.
    #[must_use]
    pub fn jump_to(&self, index: u16) -> Self {
        match self.registry.id_at(index) {
            Some(id) => self.set_active(id),
            None => self.clone(),
        }
    }

    /// Swap in a new registry, keeping the current id when it still exists.
    #[must_use]
    pub fn replace_registry(&self, registry: SectionRegistry) -> Self {
        let current_id = self.current_id();
        Self::initialize(registry, Some(current_id))
    }

    fn at(&self, index: u16) -> Self {
        Self {
            registry: self.registry.clone(),
            current: index.min(self.registry.last_index()),
        }
    }
}
