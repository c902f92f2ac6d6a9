//! CPU-side rendering
//!
//! Turns the simulation's draw calls into a flat triangle list plus text
//! commands. Uploading and presenting them is up to the host.

pub mod draw_list;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawList, TextCommand};
pub use vertex::{Vertex, colors};
