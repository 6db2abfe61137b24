//! Print export pipeline: HTML rendering plus the file/browser handoff

pub mod html;
pub mod printer;
