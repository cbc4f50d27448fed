//! Package Module
//!
//! Orchestrates the packaging flow for mapdlc.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`PackageOptions`)
//! - `result` - Outcomes and reports (`ProjectOutcome`, `RunReport`, `PlanReport`)
//! - `run` - Per-project state machine (`PackageRun`)
//! - `use_case` - Core use case logic (`PackageUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use mapdlc::application::package::{PackageOptions, PackageUseCase};
//!
//! let use_case = PackageUseCase::new(builder, SystemClock, scanner, manifests);
//! let report = use_case.execute(&PackageOptions::from_config(&config), &sink);
//! ```

mod options;
mod result;
mod run;
mod use_case;

pub use options::PackageOptions;
pub use result::{PlanReport, ProjectOutcome, ProjectPlan, ProjectReport, RunReport};
pub use use_case::PackageUseCase;

#[cfg(test)]
mod tests;
