pub mod task_card;

pub use task_card::TaskCard;
