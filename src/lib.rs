//! Word grid (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `wordgrid::{adapter,core,types}`.

pub use wordgrid_adapter as adapter;
pub use wordgrid_core as core;
pub use wordgrid_types as types;
