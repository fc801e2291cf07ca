//! High-level operations coordinating the package manager, the file system
//! and console output

pub mod download;
