// Wizard state: the document being edited plus the active step.
// The store is owned by a session and passed by reference; there is no global instance.

pub mod steps;
pub mod store;

pub use steps::{StepInfo, ALL_STEPS};
pub use store::FormStateStore;
