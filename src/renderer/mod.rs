//! Rendering module
//!
//! Produces a platform-neutral draw list per frame; hosts replay it onto
//! whatever surface they own.

pub mod frame;
pub mod palette;
pub mod scene;

pub use frame::{ColorIndex, DrawCommand, Frame};
pub use scene::draw_frame;
