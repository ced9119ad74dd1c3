//! 宣言と文のコード生成

use super::{runtime, unexpected, CodeGenerator};
use crate::analyzer::Type;
use crate::ast::{Node, NodeKind};
use crate::error::{AstError, CompileResult, GuardedConstruct, SemanticError};
use std::io::Write;

impl<'s, W: Write> CodeGenerator<'s, W> {
    /// `VAR name AS type ;` を `type name;` に変換し、シンボルテーブルに登録する
    pub(super) fn emit_declarations(&mut self, node: &Node) -> CompileResult<()> {
        if node.is_empty() {
            return Ok(());
        }

        let name = node.child(1).text_or_empty();
        let type_node = node.child(3);
        let ty = type_node
            .text_or_empty()
            .parse::<Type>()
            .map_err(|_| AstError::UnknownType {
                name: type_node.text_or_empty().to_string(),
                line: type_node.line(),
            })?;

        self.state.symbols.declare(name, ty);
        self.write(&format!("{} {};\n", ty, name))?;

        self.generate(node.child(5))
    }

    pub(super) fn emit_statement_sequence(&mut self, node: &Node) -> CompileResult<()> {
        if node.is_empty() {
            return Ok(());
        }

        let statement = node.child(0);
        if !matches!(
            statement.kind(),
            NodeKind::Assignment | NodeKind::If | NodeKind::While | NodeKind::WriteInt
        ) {
            return Err(unexpected(statement));
        }

        self.write_indent()?;
        self.generate(statement)?;
        self.generate(node.child(2))
    }

    /// 型の不一致は報告するだけで、代入文は常に出力する
    pub(super) fn emit_assignment(&mut self, node: &Node) -> CompileResult<()> {
        let target = node.child(0);
        let name = target.text_or_empty();
        let value = node.child(2);

        let expected = self.state.lookup(name, target.line());
        let found = self.infer(value)?;
        if expected.conflicts_with(found) {
            self.state.report(
                node.line(),
                SemanticError::AssignmentMismatch {
                    name: name.to_string(),
                    expected: expected.to_string(),
                    found: found.to_string(),
                },
            );
        }

        self.write(&format!("{} = ", name))?;
        self.emit_expr(value)?;
        self.write(";\n")
    }

    pub(super) fn emit_if(&mut self, node: &Node) -> CompileResult<()> {
        let guard = node.child(1);
        self.check_guard(guard, GuardedConstruct::If)?;

        self.write("if (")?;
        self.emit_expr(guard)?;
        self.write(") {\n")?;
        self.nested(node.child(3))?;
        self.write_indent()?;
        self.write("}")?;

        let else_clause = node.child(4);
        if !else_clause.is_empty() && !else_clause.child(1).is_empty() {
            self.write(" else {\n")?;
            self.nested(else_clause)?;
            self.write_indent()?;
            self.write("}")?;
        }

        self.write("\n")
    }

    /// else節の本体（波括弧は `if` 側が出力する）
    pub(super) fn emit_else(&mut self, node: &Node) -> CompileResult<()> {
        if node.is_empty() {
            return Ok(());
        }
        self.generate(node.child(1))
    }

    pub(super) fn emit_while(&mut self, node: &Node) -> CompileResult<()> {
        let guard = node.child(1);
        self.check_guard(guard, GuardedConstruct::While)?;

        self.write("while (")?;
        self.emit_expr(guard)?;
        self.write(") {\n")?;
        self.nested(node.child(3))?;
        self.write_indent()?;
        self.write("}\n")
    }

    pub(super) fn emit_write_int(&mut self, node: &Node) -> CompileResult<()> {
        let value = node.child(1);
        let found = self.infer(value)?;
        if found.conflicts_with(Type::Int) {
            self.state.report(
                value.line(),
                SemanticError::NonIntegerWrite {
                    found: found.to_string(),
                },
            );
        }

        self.write(runtime::WRITE_INT_OPEN)?;
        self.emit_expr(value)?;
        self.write(runtime::WRITE_INT_CLOSE)
    }

    fn check_guard(&mut self, guard: &Node, construct: GuardedConstruct) -> CompileResult<()> {
        let found = self.infer(guard)?;
        if found.conflicts_with(Type::Bool) {
            self.state.report(
                guard.line(),
                SemanticError::NonBooleanGuard {
                    construct,
                    found: found.to_string(),
                },
            );
        }
        Ok(())
    }
}
