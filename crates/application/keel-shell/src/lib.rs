pub mod controller;
pub mod coordinator;
pub mod error;
pub mod registry;
pub mod shell;
pub mod surface;

pub use controller::{ControllerMap, Navigable, NavigatingEvent, ResolveController};
pub use coordinator::NavigationCoordinator;
pub use error::{NavigationError, RegistryError};
pub use registry::{NavigationRegistry, DEFAULT_SURFACE};
pub use shell::{
    ActivationContext, ExceptionInfo, PreviousExecutionState, Shell, ShellBuilder, ShellDelegate,
    ShellState, StartReason, SurfaceFactory, SuspendInfo,
};
pub use surface::{BlankSurface, Surface};

pub use keel_core::{NavigationEntry, NavigationMode, NavigationStack, PageId};
