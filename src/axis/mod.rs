pub mod projector;
pub mod ticks;
