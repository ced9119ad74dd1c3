//! 構文木ノードの定義

use crate::error::{AstError, AstResult, CompileResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 文法規則を表すノードの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Program,
    Declarations,
    StatementSequence,
    Assignment,
    If,
    Else,
    While,
    WriteInt,
    ReadInt,
    Expression,
    SimpleExpr,
    Term,
    Factor,
    Identifier,
    NumberLiteral,
    BoolLiteral,
    /// キーワード・区切り記号・演算子などのプレースホルダ
    Token,
}

/// 子ノード数の制約
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arity {
    Exactly(usize),
    /// 空（0個）または指定数
    EmptyOr(usize),
}

impl Arity {
    fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::EmptyOr(n) => count == 0 || count == n,
        }
    }

    fn describe(self) -> String {
        match self {
            Arity::Exactly(n) => n.to_string(),
            Arity::EmptyOr(n) => format!("0 or {}", n),
        }
    }
}

impl NodeKind {
    fn arity(self) -> Arity {
        match self {
            NodeKind::Program => Arity::Exactly(5),
            NodeKind::Declarations => Arity::EmptyOr(6),
            NodeKind::StatementSequence => Arity::EmptyOr(3),
            NodeKind::Assignment => Arity::Exactly(3),
            NodeKind::If => Arity::Exactly(6),
            NodeKind::Else => Arity::EmptyOr(2),
            NodeKind::While => Arity::Exactly(5),
            NodeKind::WriteInt => Arity::Exactly(2),
            NodeKind::ReadInt => Arity::Exactly(0),
            NodeKind::Expression | NodeKind::SimpleExpr | NodeKind::Term => Arity::Exactly(3),
            NodeKind::Factor => Arity::Exactly(3),
            NodeKind::Identifier | NodeKind::NumberLiteral | NodeKind::BoolLiteral | NodeKind::Token => {
                Arity::Exactly(0)
            }
        }
    }

    /// テキストを必ず持つ葉ノードかどうか
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::Identifier | NodeKind::NumberLiteral | NodeKind::BoolLiteral | NodeKind::Token
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::Declarations => "declarations",
            NodeKind::StatementSequence => "statementSequence",
            NodeKind::Assignment => "assignment",
            NodeKind::If => "if",
            NodeKind::Else => "else",
            NodeKind::While => "while",
            NodeKind::WriteInt => "writeInt",
            NodeKind::ReadInt => "readInt",
            NodeKind::Expression => "expression",
            NodeKind::SimpleExpr => "simpleExpr",
            NodeKind::Term => "term",
            NodeKind::Factor => "factor",
            NodeKind::Identifier => "identifier",
            NodeKind::NumberLiteral => "numberLiteral",
            NodeKind::BoolLiteral => "boolLiteral",
            NodeKind::Token => "token",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 構文木のノード
///
/// 構築後は不変です。`leaf` / `branch` またはデシリアライズで作成でき、
/// 子ノード数とテキストの有無はどの経路でもその時点で検証されます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct Node {
    kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    line: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

/// 検証前のJSON表現
#[derive(Deserialize)]
struct RawNode {
    kind: NodeKind,
    #[serde(default)]
    text: Option<String>,
    line: usize,
    #[serde(default)]
    children: Vec<RawNode>,
}

impl TryFrom<RawNode> for Node {
    type Error = AstError;

    /// 子から順に変換し、各ノードの形を検証する
    fn try_from(raw: RawNode) -> AstResult<Self> {
        let children = raw
            .children
            .into_iter()
            .map(Node::try_from)
            .collect::<AstResult<Vec<_>>>()?;
        let node = Self {
            kind: raw.kind,
            text: raw.text,
            line: raw.line,
            children,
        };
        node.check_shape()?;
        Ok(node)
    }
}

impl Node {
    /// 葉ノードを作成
    pub fn leaf(kind: NodeKind, text: impl Into<String>, line: usize) -> AstResult<Self> {
        let node = Self {
            kind,
            text: Some(text.into()),
            line,
            children: Vec::new(),
        };
        node.check_shape()?;
        Ok(node)
    }

    /// 子ノードを持つノードを作成
    ///
    /// `readInt` や空の `declarations` のように子を持たない非葉ノードもここで作る。
    pub fn branch(kind: NodeKind, line: usize, children: Vec<Node>) -> AstResult<Self> {
        let node = Self {
            kind,
            text: None,
            line,
            children,
        };
        node.check_shape()?;
        Ok(node)
    }

    /// JSONから構文木を読み込み、すべてのノードを再検証する
    ///
    /// 文の列は右再帰で深くネストするので、再帰の上限を外してスタックを伸ばしながら読む。
    pub fn from_json(json: &str) -> CompileResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let raw = RawNode::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        Ok(Node::try_from(raw)?)
    }

    pub fn to_json(&self) -> CompileResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn check_shape(&self) -> AstResult<()> {
        let arity = self.kind.arity();
        if !arity.accepts(self.children.len()) {
            return Err(AstError::Arity {
                kind: self.kind,
                expected: arity.describe(),
                found: self.children.len(),
                line: self.line,
            });
        }

        if self.kind.is_leaf() {
            match self.text.as_deref() {
                None | Some("") => {
                    return Err(AstError::MissingText {
                        kind: self.kind,
                        line: self.line,
                    })
                }
                Some(text) if self.kind == NodeKind::NumberLiteral => {
                    if !text.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(AstError::InvalidNumeral {
                            text: text.to_string(),
                            line: self.line,
                        });
                    }
                }
                Some(_) => {}
            }
        } else if self.text.is_some() {
            return Err(AstError::UnexpectedText {
                kind: self.kind,
                line: self.line,
            });
        }

        Ok(())
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// 葉ノードのテキスト（検証済みなので葉なら必ず存在する）
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// `index` 番目の子ノード
    ///
    /// 子ノード数は種類ごとに固定なので、検証済みの木で範囲外になることはない。
    pub fn child(&self, index: usize) -> &Node {
        &self.children[index]
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
