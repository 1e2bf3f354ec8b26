//! Camera and input: desktop pointer events mapped to builder actions.
//!
//! # Invariants
//! - The builder consumes [`Action`]s, never raw input events.
//! - Camera zoom stays within its configured range.

pub mod action;
mod camera;
mod desktop;

pub use action::Action;
pub use camera::{CameraRig, PointerButton};
pub use desktop::{DesktopInput, InputEvent, Key};
