pub mod file;
pub mod optimization;
