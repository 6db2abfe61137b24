//! Core functionality: the CV record, editor state, preview projection,
//! and configuration

pub mod config;
pub mod cv;
pub mod editor;
pub mod preview;
