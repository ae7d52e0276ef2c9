pub mod breakdown;
pub mod config;
pub mod report;
pub mod scoring;
pub mod signals;
