//! World-layer scene graph.
//!
//! Unlike the UI's open [`Component`](hearth_ui::Component) trait, scene
//! nodes carry a closed [`Shape`] enum and live by value in one vector.

mod graph;
mod node;
mod shape;

pub use graph::SceneGraph;
pub use node::{Node, NO_PARENT};
pub use shape::Shape;
