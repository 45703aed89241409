pub mod add;
pub mod due;
pub mod list;
pub mod preview;
pub mod remove;
pub mod review;
pub mod stats;
