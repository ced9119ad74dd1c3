//! TL13の構文木
//!
//! 構文木は外部のパーサーが構築し、このクレートは読み取るだけです。

pub mod builder;
mod node;
mod printer;

pub use node::{Node, NodeKind};
