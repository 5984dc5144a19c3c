pub mod entry;
pub mod stack;
pub mod util;

pub use entry::{NavigationEntry, NavigationMode, PageId};
pub use stack::NavigationStack;
