//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store canvas-agnostic draw commands
//! - keep call order so replay matches what a live canvas would have seen

mod cmd;
mod list;

pub use cmd::DrawCmd;
pub use list::DrawList;
