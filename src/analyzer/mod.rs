//! セマンティック解析モジュール
//!
//! シンボルテーブルと型推論を提供します。検査そのものは
//! コード生成器が走査の途中で呼び出します。

mod symbol;
mod type_inference;

// 公開API
pub use symbol::{Symbol, SymbolTable, Type};
pub use type_inference::TypeInference;
