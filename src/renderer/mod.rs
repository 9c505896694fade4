//! Rendering module
//!
//! Frames are described as primitive draw calls on a [`Canvas`]; rasterizing
//! them is left to the platform.

pub mod canvas;
pub mod pixelate;
pub mod scene;
pub mod shapes;

pub use canvas::{Anchor, Canvas, Color, DrawCommand, DrawList, Font, SpriteId, Text};
pub use pixelate::{PixelateError, pixelate_rgba};
pub use scene::{SceneOptions, draw_session};
