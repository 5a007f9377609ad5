// Adapters layer: concrete renderers for the Renderer port.

pub mod render;

pub use render::{JsonRenderer, TextRenderer};
