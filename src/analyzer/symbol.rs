//! シンボルテーブルおよび関連するデータ構造

use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// TL13の意味上の型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Bool,
    /// 未宣言の変数に与えられる番兵。どの実在の型とも一致しない
    Undefined,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Bool => "bool",
            Type::Undefined => "undefined",
        }
    }

    /// 報告すべき型の不一致かどうか
    ///
    /// 番兵の `Undefined` を含む組は、未宣言変数の診断で既に数えられているので不一致としない。
    pub fn conflicts_with(self, other: Type) -> bool {
        self != other && self != Type::Undefined && other != Type::Undefined
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Type {
    type Err = ();

    /// 宣言に書ける型名だけを受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Type::Int),
            "bool" => Ok(Type::Bool),
            _ => Err(()),
        }
    }
}

/// シンボル情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
    pub initialized: bool,
}

/// 単一の平坦な名前空間
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 変数を宣言
    ///
    /// 既に宣言済みの名前は型を上書きし、エラーにはしない。
    pub fn declare(&mut self, name: &str, ty: Type) {
        log::debug!("declare {}: {}", name, ty);
        match self.symbols.get_mut(name) {
            Some(symbol) => {
                symbol.ty = ty;
                symbol.initialized = true;
            }
            None => {
                self.symbols.insert(
                    name.to_string(),
                    Symbol {
                        name: name.to_string(),
                        ty,
                        initialized: true,
                    },
                );
            }
        }
    }

    /// シンボルを検索（診断は出さない）
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// 宣言順にシンボルを列挙
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }
}
