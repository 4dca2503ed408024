pub mod schedule;
pub use schedule::{time_shuffle, TimeShuffle};
