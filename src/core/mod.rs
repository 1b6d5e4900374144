pub mod calculator;
pub mod codec;
pub mod sort;
pub mod store;
pub mod tracker;

pub use tracker::Tracker;
