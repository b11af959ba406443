pub mod diff;
pub mod expectation;
pub mod snapshot;
pub mod types;

pub use diff::PackageDiff;
pub use expectation::Expectation;
pub use snapshot::Snapshot;
pub use types::{Action, ExpectedState, ManagerKind, Nevra};
