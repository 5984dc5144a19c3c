use std::collections::HashMap;

use keel_core::{NavigationMode, PageId};
use serde_json::Value;

/// The logic unit bound to a displayed page.
///
/// Both hooks default to no-ops; a page without a controller is a valid,
/// silent situation.
pub trait Navigable {
    /// Called after a navigation has been committed and this controller was
    /// bound to the new content.
    fn on_navigated_to(&mut self, _parameter: Option<&Value>, _mode: NavigationMode) {}

    /// Called before the page this controller is bound to is left. Setting
    /// `event.cancel()` vetoes the navigation; nothing will have mutated.
    fn on_navigating_from(&mut self, _event: &mut NavigatingEvent) {}
}

/// Describes a pending departure from the currently displayed page.
#[derive(Debug)]
pub struct NavigatingEvent {
    from: Option<PageId>,
    target: PageId,
    mode: NavigationMode,
    cancelled: bool,
}

impl NavigatingEvent {
    pub fn new(from: Option<PageId>, target: PageId, mode: NavigationMode) -> Self {
        Self {
            from,
            target,
            mode,
            cancelled: false,
        }
    }

    /// The page being left, if the surface was showing one.
    pub fn from(&self) -> Option<&PageId> {
        self.from.as_ref()
    }

    /// The page the surface is about to show.
    pub fn target(&self) -> &PageId {
        &self.target
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Veto the pending navigation.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Supplies a controller for content that has none bound.
///
/// Must be side-effect-free with respect to navigation state; returning
/// `None` is normal.
pub trait ResolveController {
    fn resolve(&self, page: &PageId) -> Option<Box<dyn Navigable>>;
}

type ControllerFactory = Box<dyn Fn() -> Box<dyn Navigable>>;

/// Explicit page-identity to controller-factory mapping, populated by
/// application code at shell-build time.
#[derive(Default)]
pub struct ControllerMap {
    factories: HashMap<PageId, ControllerFactory>,
}

impl ControllerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for `page`. A later registration for the same
    /// page replaces the earlier one.
    pub fn insert(
        &mut self,
        page: impl Into<PageId>,
        factory: impl Fn() -> Box<dyn Navigable> + 'static,
    ) {
        self.factories.insert(page.into(), Box::new(factory));
    }

    pub fn contains(&self, page: &PageId) -> bool {
        self.factories.contains_key(page)
    }
}

impl ResolveController for ControllerMap {
    fn resolve(&self, page: &PageId) -> Option<Box<dyn Navigable>> {
        self.factories.get(page).map(|factory| factory())
    }
}
