//! Terminal UI for the mapdlc binary
//!
//! Layers, bottom up: `theme` tokens, `primitives` (icons, colored text,
//! borders), `widgets` and `blocks` built from them, and per-command `views`.

pub mod blocks;
pub mod console;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
