use keel_core::{NavigationEntry, NavigationMode};

use crate::controller::Navigable;

/// The on-screen container that presents one page at a time.
///
/// Rendering itself is out of scope for this crate; implementations decide
/// what "display" means (a window frame, a pane, a headless recorder).
pub trait Surface {
    /// Present `entry` as the surface's current content.
    ///
    /// A surface that binds its own controller to the page returns it here;
    /// `None` defers binding to the shell's controller resolver.
    fn render(&mut self, entry: &NavigationEntry, mode: NavigationMode) -> Option<Box<dyn Navigable>>;

    /// Bring the surface to the foreground.
    fn activate(&mut self) {}
}

/// Default surface: an empty navigable container with no content and no
/// self-bound controllers.
#[derive(Debug, Default)]
pub struct BlankSurface;

impl Surface for BlankSurface {
    fn render(&mut self, _entry: &NavigationEntry, _mode: NavigationMode) -> Option<Box<dyn Navigable>> {
        None
    }
}
