//! Software rendering module
//!
//! Everything is rasterized on the CPU into a [`Canvas`]; there is no GPU or
//! graphics library underneath.

pub mod assets;
pub mod canvas;
pub mod color;
pub mod scene;
pub mod shapes;
pub mod sprite;
pub mod text;
pub mod view;

pub use assets::Assets;
pub use canvas::Canvas;
pub use color::{Color, colors};
pub use sprite::{Sprite, SpriteError};
pub use text::{Align, Font};
pub use view::Viewport;
