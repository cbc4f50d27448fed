//! Domain Layer
//!
//! Pure packaging logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Projects, assets, package layout
//! - `value_objects/` - Names, extension whitelist, pipeline states
//! - `services/` - Template compilation and manifest rendering
//! - `ports/` - Interfaces for the archive tool, events, and time

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
