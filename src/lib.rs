//! TUI DMD (workspace facade crate).
//!
//! Re-exports the member crates under `tui_dmd::{types,core,engine,term}` so
//! binaries, tests and benches share one import root. The demo scene and the
//! `dmd-info` summary live here too.

pub mod info;
pub mod scene;

pub use tui_dmd_core as core;
pub use tui_dmd_engine as engine;
pub use tui_dmd_term as term;
pub use tui_dmd_types as types;
