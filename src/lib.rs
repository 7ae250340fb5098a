//! Library definition for adjmst.
pub mod compare;
pub mod config;
pub mod error;
pub mod graph;
pub mod init;
pub mod matrix;
pub mod spanning_tree;
pub mod writers;
