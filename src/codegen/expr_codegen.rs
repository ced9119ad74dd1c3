//! 式のコード生成
//!
//! 式を書き出す前に、文レベルの生成器が必ずその式全体の型を推論している。
//! 未宣言変数の報告は推論側で1回だけ行われるので、ここでは名前をそのまま書く。

use super::{runtime, unexpected, CodeGenerator};
use crate::ast::{Node, NodeKind};
use crate::error::{CompileResult, SemanticError};
use std::io::Write;

/// TL13の比較演算子をCの演算子に変換
pub fn comparison_operator(op: &str) -> &str {
    match op {
        "=" => "==",
        other => other,
    }
}

/// TL13の算術演算子をCの演算子に変換
pub fn arithmetic_operator(op: &str) -> &str {
    match op {
        "div" => "/",
        "mod" => "%",
        other => other,
    }
}

/// 数値リテラルが `0..=2147483647` に収まるか
///
/// どの整数型にも収まらない長さの数字列も範囲外とみなす。
pub fn literal_in_range(text: &str) -> bool {
    text.parse::<u64>()
        .map_or(false, |value| value <= runtime::MAX_INT_LITERAL)
}

impl<'s, W: Write> CodeGenerator<'s, W> {
    pub(super) fn emit_expr(&mut self, node: &Node) -> CompileResult<()> {
        match node.kind() {
            NodeKind::Expression => {
                let op = comparison_operator(node.child(1).text_or_empty());
                self.emit_binary(node, op)
            }
            NodeKind::SimpleExpr | NodeKind::Term => {
                let op = arithmetic_operator(node.child(1).text_or_empty());
                self.emit_binary(node, op)
            }
            NodeKind::Factor => {
                self.write("(")?;
                self.emit_expr(node.child(1))?;
                self.write(")")
            }
            NodeKind::Identifier | NodeKind::BoolLiteral => self.write(node.text_or_empty()),
            NodeKind::NumberLiteral => {
                let literal = node.text_or_empty();
                if !literal_in_range(literal) {
                    self.state.report(
                        node.line(),
                        SemanticError::LiteralOutOfRange {
                            literal: literal.to_string(),
                        },
                    );
                }
                self.write(literal)
            }
            NodeKind::ReadInt => self.write(runtime::READ_INT_CALL),
            NodeKind::Program
            | NodeKind::Declarations
            | NodeKind::StatementSequence
            | NodeKind::Assignment
            | NodeKind::If
            | NodeKind::Else
            | NodeKind::While
            | NodeKind::WriteInt
            | NodeKind::Token => Err(unexpected(node)),
        }
    }

    fn emit_binary(&mut self, node: &Node, op: &str) -> CompileResult<()> {
        self.emit_expr(node.child(0))?;
        self.write(&format!(" {} ", op))?;
        self.emit_expr(node.child(2))
    }
}
