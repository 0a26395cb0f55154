pub mod app;
#[cfg(feature = "csr")]
pub mod bridge;
pub mod core;
pub mod features;
pub mod pages;

pub use crate::core::models::{CardDisplayState, TaskSummary};
pub use crate::core::CardTheme;
pub use features::task_card::TaskCard;
