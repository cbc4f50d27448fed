//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PackageUseCase` - Packages every mapping project (and the `plan` dry run)

pub mod package;

pub use package::{
    PackageOptions, PackageUseCase, PlanReport, ProjectOutcome, ProjectPlan, ProjectReport,
    RunReport,
};
