//! コード生成モジュール
//!
//! 構文木を1回だけ深さ優先で走査し、各ノードで意味検査を行いながら
//! Cのソースを出力先へ逐次書き出します。

mod expr_codegen;
mod runtime;
mod stmt_codegen;

pub use expr_codegen::{arithmetic_operator, comparison_operator, literal_in_range};

use crate::analyzer::{Type, TypeInference};
use crate::ast::{Node, NodeKind};
use crate::compiler::CompilationState;
use crate::error::{CompileError, CompileResult};
use std::io::Write;

/// コード生成器
pub struct CodeGenerator<'s, W: Write> {
    state: &'s mut CompilationState,
    out: W,
    /// 現在のブロックの深さ
    indent_level: usize,
}

impl<'s, W: Write> CodeGenerator<'s, W> {
    pub fn new(state: &'s mut CompilationState, out: W) -> Self {
        Self {
            state,
            out,
            indent_level: 0,
        }
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// ノードの種類ごとにCコードを生成
    pub fn generate(&mut self, node: &Node) -> CompileResult<()> {
        log::trace!("generate {} at line {}", node.kind(), node.line());
        match node.kind() {
            NodeKind::Program => self.emit_program(node),
            NodeKind::Declarations => self.emit_declarations(node),
            NodeKind::StatementSequence => self.emit_statement_sequence(node),
            NodeKind::Assignment => self.emit_assignment(node),
            NodeKind::If => self.emit_if(node),
            NodeKind::Else => self.emit_else(node),
            NodeKind::While => self.emit_while(node),
            NodeKind::WriteInt => self.emit_write_int(node),
            NodeKind::ReadInt
            | NodeKind::Expression
            | NodeKind::SimpleExpr
            | NodeKind::Term
            | NodeKind::Factor
            | NodeKind::Identifier
            | NodeKind::NumberLiteral
            | NodeKind::BoolLiteral => self.emit_expr(node),
            NodeKind::Token => Err(unexpected(node)),
        }
    }

    /// 書き出しをフラッシュ
    pub fn flush(&mut self) -> CompileResult<()> {
        self.out.flush()?;
        Ok(())
    }

    fn emit_program(&mut self, node: &Node) -> CompileResult<()> {
        log::debug!("generating program");
        self.write(runtime::PRELUDE)?;

        // 宣言は main の本体より必ず前に出力される
        self.generate(node.child(1))?;

        self.write(runtime::MAIN_OPEN)?;
        self.indent_level += 1;
        self.generate(node.child(3))?;
        self.write_indent()?;
        self.write(runtime::MAIN_RETURN)?;
        self.indent_level -= 1;
        self.write(runtime::MAIN_CLOSE)
    }

    /// 1段深くして本体を生成し、深さを元に戻す
    fn nested(&mut self, body: &Node) -> CompileResult<()> {
        self.indent_level += 1;
        let result = self.generate(body);
        self.indent_level -= 1;
        result
    }

    fn infer(&mut self, node: &Node) -> CompileResult<Type> {
        TypeInference::new(self.state).infer(node)
    }

    fn write(&mut self, text: &str) -> CompileResult<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_indent(&mut self) -> CompileResult<()> {
        for _ in 0..self.indent_level {
            self.out.write_all(runtime::INDENT.as_bytes())?;
        }
        Ok(())
    }
}

fn unexpected(node: &Node) -> CompileError {
    CompileError::UnexpectedNode {
        kind: node.kind(),
        line: node.line(),
    }
}
