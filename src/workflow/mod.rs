pub mod engine;
pub mod state;

pub use engine::{ExportDownload, GenerateParams, WorkflowEngine};
pub use state::{Stage, WorkflowState};
