//! Server-side rendering of node trees with hydration data.

mod renderer;

pub use renderer::SsrRenderer;
