//! Component system.
//!
//! [`Component`] is the capability trait; [`ComponentTree`] owns components
//! in an arena and drives them. The remaining modules are the stock widgets.

mod button;
mod core;
mod label;
mod panel;
mod progress;
mod tree;

pub use button::Button;
pub use core::Component;
pub use label::{Label, DEFAULT_FONT_SIZE};
pub use panel::Panel;
pub use progress::ProgressBar;
pub use tree::{ComponentTree, MAX_CHILDREN};
