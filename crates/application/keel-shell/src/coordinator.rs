use std::rc::Rc;

use keel_core::{NavigationEntry, NavigationMode, NavigationStack, PageId};
use serde_json::Value;
use tracing::debug;

use crate::controller::{Navigable, NavigatingEvent, ResolveController};
use crate::error::NavigationError;
use crate::surface::Surface;

/// Mediates navigation for a single surface: one back-history stack, one
/// live surface, and at most one controller bound to the displayed page.
///
/// Every navigation attempt runs the same synchronous sequence: ask the
/// bound controller for permission, commit the transition, bind a
/// controller for the new content, notify it. A veto in the first step
/// leaves stack and content exactly as they were.
pub struct NavigationCoordinator {
    stack: NavigationStack,
    surface: Box<dyn Surface>,
    current: Option<NavigationEntry>,
    controller: Option<Box<dyn Navigable>>,
    resolver: Rc<dyn ResolveController>,
}

impl NavigationCoordinator {
    pub fn new(surface: Box<dyn Surface>, resolver: Rc<dyn ResolveController>) -> Self {
        Self {
            stack: NavigationStack::new(),
            surface,
            current: None,
            controller: None,
            resolver,
        }
    }

    /// Navigate forward to `page`.
    ///
    /// Returns `Ok(false)` when the bound controller vetoed the transition
    /// (no state mutated), `Ok(true)` on commit. An empty page identity is
    /// a contract violation and fails immediately.
    ///
    /// With `clear_history` the back stack is cleared after the new content
    /// is committed, so the entry pushed while leaving is discarded along
    /// with the rest.
    pub fn navigate(
        &mut self,
        page: impl Into<PageId>,
        parameter: Option<Value>,
        clear_history: bool,
    ) -> Result<bool, NavigationError> {
        let page = page.into();
        if page.is_empty() {
            return Err(NavigationError::EmptyPageIdentity);
        }

        if !self.approve_departure(&page, NavigationMode::New) {
            debug!("navigation to '{page}' cancelled by current controller");
            return Ok(false);
        }

        if let Some(leaving) = self.current.take() {
            self.stack.push(leaving);
        }
        let entry = NavigationEntry::new(page, parameter);
        self.controller = self.surface.render(&entry, NavigationMode::New);
        self.current = Some(entry);

        if clear_history {
            self.stack.clear();
        }

        self.bind_and_notify(NavigationMode::New);
        Ok(true)
    }

    /// Return to the previous entry. No-op when there is no history;
    /// callers check `can_go_back()` first.
    pub fn go_back(&mut self) {
        let Some(target) = self.stack.peek().map(|entry| entry.page().clone()) else {
            return;
        };

        if !self.approve_departure(&target, NavigationMode::Back) {
            debug!("back navigation to '{target}' cancelled by current controller");
            return;
        }

        let Some(entry) = self.stack.pop() else {
            return;
        };
        self.controller = self.surface.render(&entry, NavigationMode::Back);
        // The entry being left is dropped, not retained as forward history.
        self.current = Some(entry);

        self.bind_and_notify(NavigationMode::Back);
    }

    /// Re-present the current entry in place and re-run controller binding
    /// with mode `Refresh`. The back stack is untouched.
    pub fn refresh(&mut self) {
        let Some(entry) = self.current.as_ref() else {
            return;
        };
        self.controller = self.surface.render(entry, NavigationMode::Refresh);
        self.bind_and_notify(NavigationMode::Refresh);
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }

    pub fn back_depth(&self) -> usize {
        self.stack.depth()
    }

    /// The entry the surface is currently displaying.
    pub fn current(&self) -> Option<&NavigationEntry> {
        self.current.as_ref()
    }

    /// Replace the controller bound to the displayed content. Intended for
    /// hosts that manage binding themselves instead of the resolver.
    pub fn set_controller(&mut self, controller: Option<Box<dyn Navigable>>) {
        self.controller = controller;
    }

    pub fn activate_surface(&mut self) {
        self.surface.activate();
    }

    /// Pre-navigation hook: the bound controller may veto. With no
    /// controller the departure is always approved.
    fn approve_departure(&mut self, target: &PageId, mode: NavigationMode) -> bool {
        let Some(controller) = self.controller.as_mut() else {
            return true;
        };
        let from = self.current.as_ref().map(|entry| entry.page().clone());
        let mut event = NavigatingEvent::new(from, target.clone(), mode);
        controller.on_navigating_from(&mut event);
        !event.is_cancelled()
    }

    /// Post-commit: lazily bind a controller (surface-provided first, then
    /// resolver) and fire the post-navigation hook. No controller is fine.
    fn bind_and_notify(&mut self, mode: NavigationMode) {
        let Some(entry) = self.current.as_ref() else {
            return;
        };
        if self.controller.is_none() {
            self.controller = self.resolver.resolve(entry.page());
        }
        if let Some(controller) = self.controller.as_mut() {
            controller.on_navigated_to(entry.parameter(), mode);
        }
        debug!("navigated to '{}' ({mode:?})", entry.page());
    }
}
