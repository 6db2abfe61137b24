//! UI components for CV Forge

pub mod form;
pub mod preview;
pub mod settings;
pub mod status;
pub mod theme;
