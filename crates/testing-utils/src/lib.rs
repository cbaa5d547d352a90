//! Test utilities shared across the workspace: in-memory repository mocks
//! and entity builders. Not part of the production dependency graph.

pub mod builders;
pub mod mocks;

pub use builders::{ReportBuilder, ResponderBuilder};
pub use mocks::{MockAssignmentRepository, MockReportRepository, MockResponderRepository};
