//! Output formatting for generated answers

pub mod console;
