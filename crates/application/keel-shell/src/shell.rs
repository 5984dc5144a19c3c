use std::rc::Rc;

use keel_core::PageId;
use tracing::{debug, info, warn};

use crate::controller::{ControllerMap, Navigable, ResolveController};
use crate::coordinator::NavigationCoordinator;
use crate::registry::{NavigationRegistry, DEFAULT_SURFACE};
use crate::surface::{BlankSurface, Surface};

/// Lifecycle of a running shell. `Suspended` and `Terminated` are
/// platform-driven; the shell reacts to them but does not control process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    NotStarted,
    Starting,
    Running,
    Suspended,
    Terminated,
}

/// The platform's classification of the previous run, delivered with a
/// launch signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviousExecutionState {
    NotRunning,
    Running,
    Suspended,
    Terminated,
    ClosedByUser,
}

/// Why the application is being started: cold start vs brought forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartReason {
    Launch,
    Activate,
}

/// Opaque payload accompanying a launch or activation signal. Parsing
/// platform-specific activation data is the host's business.
#[derive(Debug, Clone, Default)]
pub struct ActivationContext {
    pub argument: Option<String>,
    pub payload: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default)]
pub struct SuspendInfo {
    /// Platform hint for how long the application may keep running, when
    /// one is provided.
    pub deadline_ms: Option<u64>,
}

/// An exception observed elsewhere in the application, forwarded verbatim.
#[derive(Debug, Clone)]
pub struct ExceptionInfo {
    pub message: String,
}

/// Builds the root surface when no externally supplied one exists.
pub type SurfaceFactory = Box<dyn Fn(&ActivationContext) -> Box<dyn Surface>>;

/// Application hooks invoked by the shell. Only `on_start` is required.
pub trait ShellDelegate {
    /// Must-have setup. Runs on every path that initializes the root
    /// surface, even when later logic determines the app is restoring.
    /// Returning a surface injects it as the root; an injected surface wins
    /// over the factory default.
    fn on_initialize(&mut self, _ctx: &ActivationContext) -> Option<Box<dyn Surface>> {
        None
    }

    /// The one normalized start event, shared by launch and activate paths.
    fn on_start(
        &mut self,
        reason: StartReason,
        ctx: &ActivationContext,
        nav: &mut NavigationRegistry,
    );

    fn on_suspending(&mut self, _info: &SuspendInfo) {}

    fn on_unhandled_exception(&mut self, _info: &ExceptionInfo) {}
}

/// The top-level lifecycle coordinator.
///
/// Classifies platform start/activate/suspend signals, builds and registers
/// the default navigation coordinator, and dispatches a single normalized
/// start event to the delegate. An explicit object owned by the host, not
/// an ambient singleton: construct it on application start, drop it on
/// exit, pass it to whatever needs it.
pub struct Shell {
    state: ShellState,
    is_active: bool,
    is_minimized: bool,
    back_subscribed: bool,
    navigation: NavigationRegistry,
    resolver: Rc<dyn ResolveController>,
    surface_factory: SurfaceFactory,
    delegate: Box<dyn ShellDelegate>,
}

impl Shell {
    pub fn builder(delegate: impl ShellDelegate + 'static) -> ShellBuilder {
        ShellBuilder {
            delegate: Box::new(delegate),
            controllers: ControllerMap::new(),
            surface_factory: Box::new(|_ctx| Box::new(BlankSurface) as Box<dyn Surface>),
        }
    }

    /// Platform launch signal.
    pub fn launched(&mut self, previous: PreviousExecutionState, ctx: &ActivationContext) {
        info!("launch signal, previous execution state {previous:?}");
        if self.state == ShellState::NotStarted {
            self.state = ShellState::Starting;
        }

        if previous != PreviousExecutionState::Running {
            self.initialize_surface(ctx);
        }

        match previous {
            PreviousExecutionState::Terminated => {
                // Restoring navigation from saved state stays an extension
                // point; a terminated relaunch behaves like a cold launch.
                self.dispatch_start(StartReason::Launch, ctx);
                self.back_subscribed = true;
            }
            PreviousExecutionState::NotRunning | PreviousExecutionState::ClosedByUser => {
                self.dispatch_start(StartReason::Launch, ctx);
                self.back_subscribed = true;
            }
            PreviousExecutionState::Running => {
                // Surface survives; back handling is already subscribed.
                self.dispatch_start(StartReason::Activate, ctx);
            }
            PreviousExecutionState::Suspended => {
                // Defensive default for states we cannot classify.
                self.dispatch_start(StartReason::Launch, ctx);
            }
        }

        self.state = ShellState::Running;
    }

    /// Platform activation signal (brought forward without a fresh launch,
    /// possibly before any launch at all).
    pub fn activated(&mut self, ctx: &ActivationContext) {
        info!("activate signal");
        if self.state == ShellState::NotStarted {
            self.state = ShellState::Starting;
        }

        // Activation sometimes requires the surface to be built first.
        if !self.navigation.is_registered(DEFAULT_SURFACE) {
            self.initialize_surface(ctx);
        }

        self.dispatch_start(StartReason::Activate, ctx);

        // Ensure foreground, which also hides any custom splash overlay.
        if let Ok(coordinator) = self.navigation.get_mut(DEFAULT_SURFACE) {
            coordinator.activate_surface();
        }

        self.state = ShellState::Running;
    }

    /// Platform visibility change: minimized = not visible.
    pub fn visibility_changed(&mut self, visible: bool) {
        self.is_minimized = !visible;
    }

    /// Platform window activation change: active = not deactivated.
    pub fn activation_changed(&mut self, deactivated: bool) {
        self.is_active = !deactivated;
    }

    /// Platform suspend signal; pure pass-through to the delegate.
    pub fn suspending(&mut self, info: &SuspendInfo) {
        info!("suspend signal");
        self.state = ShellState::Suspended;
        self.delegate.on_suspending(info);
    }

    /// An unhandled exception observed elsewhere; forwarded verbatim, never
    /// swallowed or translated here.
    pub fn unhandled_exception(&mut self, info: &ExceptionInfo) {
        warn!("unhandled exception observed: {}", info.message);
        self.delegate.on_unhandled_exception(info);
    }

    /// Platform-driven process teardown.
    pub fn terminated(&mut self) {
        self.state = ShellState::Terminated;
    }

    /// Platform back request. Handled (`true`) when the default coordinator
    /// has history to pop; otherwise the platform applies its own default.
    pub fn back_requested(&mut self) -> bool {
        if !self.back_subscribed {
            return false;
        }
        match self.navigation.get_mut(DEFAULT_SURFACE) {
            Ok(coordinator) if coordinator.can_go_back() => {
                coordinator.go_back();
                true
            }
            _ => false,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }

    pub fn navigation(&self) -> &NavigationRegistry {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationRegistry {
        &mut self.navigation
    }

    /// The shared controller resolver, for wiring secondary coordinators.
    pub fn resolver(&self) -> Rc<dyn ResolveController> {
        Rc::clone(&self.resolver)
    }

    fn dispatch_start(&mut self, reason: StartReason, ctx: &ActivationContext) {
        debug!("dispatching start, reason {reason:?}");
        self.delegate.on_start(reason, ctx, &mut self.navigation);
    }

    /// Root-surface initialization. `on_initialize` runs unconditionally on
    /// this path; the surface itself is built only when none is registered,
    /// and a delegate-injected surface wins over the factory default.
    fn initialize_surface(&mut self, ctx: &ActivationContext) {
        let injected = self.delegate.on_initialize(ctx);

        if self.navigation.is_registered(DEFAULT_SURFACE) {
            if injected.is_some() {
                debug!("ignoring injected surface, default surface already registered");
            }
            return;
        }

        let surface = injected.unwrap_or_else(|| (self.surface_factory)(ctx));
        let mut coordinator = NavigationCoordinator::new(surface, Rc::clone(&self.resolver));
        coordinator.activate_surface();

        if let Err(err) = self.navigation.register(DEFAULT_SURFACE, coordinator) {
            // Unreachable: guarded by is_registered above.
            warn!("default surface registration failed: {err}");
        }
    }
}

/// Assembles a [`Shell`]: delegate, controller factories, surface factory.
pub struct ShellBuilder {
    delegate: Box<dyn ShellDelegate>,
    controllers: ControllerMap,
    surface_factory: SurfaceFactory,
}

impl ShellBuilder {
    /// Map `page` to a controller factory consulted whenever displayed
    /// content has no bound controller.
    pub fn controller(
        mut self,
        page: impl Into<PageId>,
        factory: impl Fn() -> Box<dyn Navigable> + 'static,
    ) -> Self {
        self.controllers.insert(page, factory);
        self
    }

    /// Replace the default (blank) root-surface factory.
    pub fn surface_factory(
        mut self,
        factory: impl Fn(&ActivationContext) -> Box<dyn Surface> + 'static,
    ) -> Self {
        self.surface_factory = Box::new(factory);
        self
    }

    pub fn build(self) -> Shell {
        Shell {
            state: ShellState::NotStarted,
            is_active: true,
            is_minimized: false,
            back_subscribed: false,
            navigation: NavigationRegistry::new(),
            resolver: Rc::new(self.controllers),
            surface_factory: self.surface_factory,
            delegate: self.delegate,
        }
    }
}
