//! 統一的なエラーハンドリングモジュール
//!
//! 意味エラー（診断として蓄積され、走査は継続する）と、
//! 走査そのものを中断する内部エラーの2系統を定義します。

use crate::ast::NodeKind;
use std::fmt;
use thiserror::Error;

/// tl13cの統一エラー型
///
/// 意味エラーはここには含まれません。意味エラーは [`ErrorCollector`] に
/// 蓄積され、最終的に [`crate::compiler::CompilationReport`] として返されます。
#[derive(Error, Debug)]
pub enum CompileError {
    /// 構文木の形が不正
    #[error("malformed syntax tree: {0}")]
    Ast(#[from] AstError),

    /// 式ではないノードに型推論が適用された
    #[error("node '{kind}' at line {line} is not an expression")]
    NotAnExpression { kind: NodeKind, line: usize },

    /// その位置に現れてはいけない種類のノード
    #[error("node '{kind}' at line {line} cannot appear here")]
    UnexpectedNode { kind: NodeKind, line: usize },

    /// 出力先への書き込み失敗
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON形式の構文木の読み込み失敗
    #[error("failed to read syntax tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// 構文木の構築・検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    #[error("'{kind}' at line {line} expects {expected} children, found {found}")]
    Arity {
        kind: NodeKind,
        expected: String,
        found: usize,
        line: usize,
    },

    #[error("'{kind}' at line {line} requires non-empty text")]
    MissingText { kind: NodeKind, line: usize },

    #[error("'{kind}' at line {line} is a branch node and cannot carry text")]
    UnexpectedText { kind: NodeKind, line: usize },

    #[error("invalid numeral '{text}' at line {line}")]
    InvalidNumeral { text: String, line: usize },

    #[error("unknown type '{name}' at line {line}")]
    UnknownType { name: String, line: usize },
}

/// 意味エラーの詳細
///
/// `Display` の出力がそのまま診断メッセージになります。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("Undeclared Variable '{name}'")]
    UndeclaredVariable { name: String },

    #[error("Type mismatch in assignment to '{name}'. Expected '{expected}' but got '{found}'")]
    AssignmentMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("Type mismatch in comparison: '{lhs}' vs '{rhs}'")]
    ComparisonMismatch { lhs: String, rhs: String },

    #[error("Type mismatch in arithmetic expression: '{lhs}' vs '{rhs}'")]
    ArithmeticMismatch { lhs: String, rhs: String },

    #[error("Expression guarding {construct} Statement must be boolean, got '{found}'")]
    NonBooleanGuard { construct: GuardedConstruct, found: String },

    #[error("writeInt expression must evaluate to integer got '{found}'")]
    NonIntegerWrite { found: String },

    #[error("Integer literal '{literal}' out of range (must be 0..2147483647)")]
    LiteralOutOfRange { literal: String },
}

/// ガード式を持つ構文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedConstruct {
    If,
    While,
}

impl fmt::Display for GuardedConstruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardedConstruct::If => write!(f, "If"),
            GuardedConstruct::While => write!(f, "While"),
        }
    }
}

/// 行番号付きの意味エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub error: SemanticError,
}

impl Diagnostic {
    pub fn new(line: usize, error: SemanticError) -> Self {
        Self { line, error }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR[line {}]: {}", self.line, self.error)
    }
}

/// 複数の意味エラーを検出順に蓄積するためのコレクター
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<Diagnostic>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーを追加
    pub fn add_error(&mut self, line: usize, error: SemanticError) {
        let diagnostic = Diagnostic::new(line, error);
        log::debug!("{}", diagnostic);
        self.errors.push(diagnostic);
    }

    /// エラーがあるかどうか
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// エラーの数
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// すべてのエラーを取得
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Diagnostic> {
        self.errors
    }
}

/// Result型のエイリアス
pub type CompileResult<T> = Result<T, CompileError>;

pub type AstResult<T> = Result<T, AstError>;
