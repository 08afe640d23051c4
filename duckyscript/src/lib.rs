pub mod codegen;
pub mod error;
pub mod lexer;

pub use codegen::frontend::{Compiler, compile};
pub use codegen::symbols::{KeyCode, Modifiers, lookup_key, lookup_modifier};
pub use codegen::{CompileOptions, CompiledStream, KeyCombo, Report};
pub use error::{Diagnostic, LineError};
pub use logos;
