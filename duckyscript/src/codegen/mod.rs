//! The `codegen` module turns script lines into HID boot-keyboard reports.
//!
//! It resolves key and modifier names, infers the keystrokes behind literal
//! text and assembles the final report stream.

pub mod combo;
pub mod compiler;
pub mod report;
pub mod typing;
pub use combo::KeyCombo;
pub use compiler::CompileOptions;
pub use report::{CompiledStream, Report};

/// Walks a script line by line, dispatches each line to its command handler
/// and contains per-line failures as diagnostics.
pub mod frontend;

/// Fixed key-name and modifier-name tables of the US layout.
pub mod symbols;
