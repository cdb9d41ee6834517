pub mod export;
pub mod task;
