pub mod charts;
pub mod feed;
pub mod limit;
