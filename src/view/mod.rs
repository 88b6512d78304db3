/// View subsystem - draws the visible window, gutter and status bar.

pub mod renderer;

pub use renderer::{RenderParams, View};
