//! 種類ごとの構文木ビルダー
//!
//! パーサーが作るのと同じ形（キーワードのプレースホルダを含む右再帰の連鎖）を
//! Rustのリストから組み立てます。

use super::node::{Node, NodeKind};
use crate::error::AstResult;

pub fn ident(name: &str, line: usize) -> AstResult<Node> {
    Node::leaf(NodeKind::Identifier, name, line)
}

pub fn num(text: &str, line: usize) -> AstResult<Node> {
    Node::leaf(NodeKind::NumberLiteral, text, line)
}

pub fn boolean(value: bool, line: usize) -> AstResult<Node> {
    Node::leaf(NodeKind::BoolLiteral, value.to_string(), line)
}

pub fn token(text: &str, line: usize) -> AstResult<Node> {
    Node::leaf(NodeKind::Token, text, line)
}

pub fn read_int(line: usize) -> AstResult<Node> {
    Node::branch(NodeKind::ReadInt, line, Vec::new())
}

/// 比較式 `lhs op rhs`
pub fn compare(lhs: Node, op: &str, rhs: Node, line: usize) -> AstResult<Node> {
    Node::branch(NodeKind::Expression, line, vec![lhs, token(op, line)?, rhs])
}

/// 算術式 `lhs op rhs`
///
/// 乗除算（`*`, `div`, `mod`）は `term`、それ以外は `simpleExpr` になる。
pub fn arith(lhs: Node, op: &str, rhs: Node, line: usize) -> AstResult<Node> {
    let kind = match op {
        "*" | "div" | "mod" => NodeKind::Term,
        _ => NodeKind::SimpleExpr,
    };
    Node::branch(kind, line, vec![lhs, token(op, line)?, rhs])
}

/// 括弧で囲まれた式
pub fn paren(inner: Node, line: usize) -> AstResult<Node> {
    Node::branch(NodeKind::Factor, line, vec![token("(", line)?, inner, token(")", line)?])
}

pub fn assign(name: &str, value: Node, line: usize) -> AstResult<Node> {
    Node::branch(
        NodeKind::Assignment,
        line,
        vec![ident(name, line)?, token(":=", line)?, value],
    )
}

pub fn write_int(value: Node, line: usize) -> AstResult<Node> {
    Node::branch(NodeKind::WriteInt, line, vec![token("WRITEINT", line)?, value])
}

pub fn if_then(guard: Node, body: Vec<Node>, line: usize) -> AstResult<Node> {
    let else_clause = Node::branch(NodeKind::Else, line, Vec::new())?;
    build_if(guard, body, else_clause, line)
}

pub fn if_else(guard: Node, body: Vec<Node>, otherwise: Vec<Node>, line: usize) -> AstResult<Node> {
    let else_clause = Node::branch(
        NodeKind::Else,
        line,
        vec![token("ELSE", line)?, statements(otherwise)?],
    )?;
    build_if(guard, body, else_clause, line)
}

fn build_if(guard: Node, body: Vec<Node>, else_clause: Node, line: usize) -> AstResult<Node> {
    Node::branch(
        NodeKind::If,
        line,
        vec![
            token("IF", line)?,
            guard,
            token("THEN", line)?,
            statements(body)?,
            else_clause,
            token("END", line)?,
        ],
    )
}

pub fn while_do(guard: Node, body: Vec<Node>, line: usize) -> AstResult<Node> {
    Node::branch(
        NodeKind::While,
        line,
        vec![
            token("WHILE", line)?,
            guard,
            token("DO", line)?,
            statements(body)?,
            token("END", line)?,
        ],
    )
}

/// 文のリストを `statementSequence` の連鎖に畳み込む
pub fn statements(stmts: Vec<Node>) -> AstResult<Node> {
    let end_line = stmts.last().map_or(1, Node::line);
    let mut seq = Node::branch(NodeKind::StatementSequence, end_line, Vec::new())?;
    for stmt in stmts.into_iter().rev() {
        let line = stmt.line();
        seq = Node::branch(
            NodeKind::StatementSequence,
            line,
            vec![stmt, token(";", line)?, seq],
        )?;
    }
    Ok(seq)
}

/// `(名前, 型名, 行)` のリストを `declarations` の連鎖に畳み込む
pub fn declarations(decls: &[(&str, &str, usize)]) -> AstResult<Node> {
    let end_line = decls.last().map_or(1, |&(_, _, line)| line);
    let mut chain = Node::branch(NodeKind::Declarations, end_line, Vec::new())?;
    for &(name, ty, line) in decls.iter().rev() {
        chain = Node::branch(
            NodeKind::Declarations,
            line,
            vec![
                token("VAR", line)?,
                ident(name, line)?,
                token("AS", line)?,
                token(ty, line)?,
                token(";", line)?,
                chain,
            ],
        )?;
    }
    Ok(chain)
}

pub fn program(decls: Node, stmts: Node) -> AstResult<Node> {
    Node::branch(
        NodeKind::Program,
        1,
        vec![
            token("PROGRAM", 1)?,
            decls,
            token("BEGIN", 1)?,
            stmts,
            token("END", 1)?,
        ],
    )
}
