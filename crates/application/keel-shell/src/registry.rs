use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::coordinator::NavigationCoordinator;
use crate::error::RegistryError;

/// Reserved name of the application's primary navigable surface. Registered
/// at most once, lazily, when the first root surface is built.
pub const DEFAULT_SURFACE: &str = "Default";

/// Name-indexed collection of coordinators, one per independent navigable
/// surface (primary window, secondary panes, ...).
///
/// Registration is expected to happen during single-threaded startup; a
/// name can be taken at most once.
#[derive(Default)]
pub struct NavigationRegistry {
    coordinators: HashMap<String, NavigationCoordinator>,
}

impl NavigationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        coordinator: NavigationCoordinator,
    ) -> Result<(), RegistryError> {
        match self.coordinators.entry(name.into()) {
            Entry::Occupied(occupied) => Err(RegistryError::DuplicateName(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                vacant.insert(coordinator);
                Ok(())
            }
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.coordinators.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&NavigationCoordinator, RegistryError> {
        self.coordinators
            .get(name)
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut NavigationCoordinator, RegistryError> {
        self.coordinators
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
    }

    /// The primary surface's coordinator.
    pub fn default_coordinator(&self) -> Result<&NavigationCoordinator, RegistryError> {
        self.get(DEFAULT_SURFACE)
    }

    pub fn default_coordinator_mut(&mut self) -> Result<&mut NavigationCoordinator, RegistryError> {
        self.get_mut(DEFAULT_SURFACE)
    }
}
