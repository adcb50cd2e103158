pub mod correspondence;
pub mod output;
pub mod stats;
