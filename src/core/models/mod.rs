pub mod display_state;
pub mod task_summary;

pub use display_state::CardDisplayState;
pub use task_summary::TaskSummary;
