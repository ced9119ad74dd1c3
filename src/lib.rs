//! TL13 Compiler Backend Library
//!
//! 外部のパーサーが作った構文木に対して型検査を行い、
//! 同等のCのソースを生成します。

pub mod analyzer;
pub mod ast;
pub mod codegen;
pub mod compiler;
pub mod error;

// Re-export commonly used types
pub use analyzer::{SymbolTable, Type, TypeInference};
pub use ast::{Node, NodeKind};
pub use codegen::CodeGenerator;
pub use compiler::{translate, translate_to_string, CompilationReport, CompilationState};
pub use error::{CompileError, CompileResult, Diagnostic, ErrorCollector, SemanticError};
