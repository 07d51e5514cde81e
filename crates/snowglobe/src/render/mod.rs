//! Blit targets: a software surface and a command-recording buffer.

mod surface;
mod target;

pub use surface::IndexedSurface;
pub use target::{BlitCommand, BlitOp, BlitRecorder, BlitTarget};
