//! 型推論機能
//!
//! 式ノードからその意味上の型を求める。不一致は診断として記録するが、
//! 結果の型は常に決定的に返すので、1回の走査ですべてのエラーを集められる。

use super::symbol::Type;
use crate::ast::{Node, NodeKind};
use crate::compiler::CompilationState;
use crate::error::{CompileError, CompileResult, SemanticError};

/// 型推論エンジン
pub struct TypeInference<'a> {
    /// コンパイル状態への参照
    state: &'a mut CompilationState,
}

impl<'a> TypeInference<'a> {
    /// 新しい型推論エンジンを作成
    pub fn new(state: &'a mut CompilationState) -> Self {
        Self { state }
    }

    /// 式の型を推論
    ///
    /// 文レベルのノードやトークンは式ではないため `NotAnExpression` を返す。
    pub fn infer(&mut self, node: &Node) -> CompileResult<Type> {
        match node.kind() {
            NodeKind::NumberLiteral | NodeKind::ReadInt => Ok(Type::Int),
            NodeKind::BoolLiteral => Ok(Type::Bool),
            NodeKind::Identifier => Ok(self.state.lookup(node.text_or_empty(), node.line())),

            NodeKind::Expression => {
                let (lhs, rhs, line) = self.infer_operands(node)?;
                if lhs.conflicts_with(rhs) {
                    self.state.report(
                        line,
                        SemanticError::ComparisonMismatch {
                            lhs: lhs.to_string(),
                            rhs: rhs.to_string(),
                        },
                    );
                }
                Ok(Type::Bool)
            }

            NodeKind::SimpleExpr | NodeKind::Term => {
                let (lhs, rhs, line) = self.infer_operands(node)?;
                if lhs.conflicts_with(rhs) {
                    self.state.report(
                        line,
                        SemanticError::ArithmeticMismatch {
                            lhs: lhs.to_string(),
                            rhs: rhs.to_string(),
                        },
                    );
                }
                Ok(Type::Int)
            }

            // ( expression )
            NodeKind::Factor => self.infer(node.child(1)),

            NodeKind::Program
            | NodeKind::Declarations
            | NodeKind::StatementSequence
            | NodeKind::Assignment
            | NodeKind::If
            | NodeKind::Else
            | NodeKind::While
            | NodeKind::WriteInt
            | NodeKind::Token => Err(CompileError::NotAnExpression {
                kind: node.kind(),
                line: node.line(),
            }),
        }
    }

    /// 二項式の左右の型と演算子の行番号
    fn infer_operands(&mut self, node: &Node) -> CompileResult<(Type, Type, usize)> {
        let lhs = self.infer(node.child(0))?;
        let rhs = self.infer(node.child(2))?;
        Ok((lhs, rhs, node.child(1).line()))
    }
}
