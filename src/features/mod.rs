pub mod task_card;
