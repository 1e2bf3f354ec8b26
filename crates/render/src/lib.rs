//! Rendering adapter: renderer-agnostic interface over the island builder.
//!
//! # Invariants
//! - Renderers cannot mutate the island or the build mode.
//! - Render state derives from builder state, the layout and the scenery.
//! - The build grid is drawn only while an item is being placed.
//!
//! [`SceneComposer`] produces an ordered list of boxes that any graphics
//! backend can draw. [`AsciiRenderer`] and [`DebugTextRenderer`] give text
//! views for the command line and for tests.

mod renderer;
mod scene;

pub use renderer::{AsciiRenderer, DebugTextRenderer, Renderer};
pub use scene::{DrawItem, DrawKind, SceneComposer, SceneFrame, item_center};
