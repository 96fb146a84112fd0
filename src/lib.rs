pub mod est;
pub mod obstacles;
