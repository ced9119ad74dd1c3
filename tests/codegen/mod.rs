//! コード生成テストの共通モジュール
//!
//! コード生成テストで使用する共通のヘルパー関数を定義する。

pub use tl13c::ast::builder::*;
pub use tl13c::{translate_to_string, CompilationReport, Node};

/// 構文木を翻訳して出力と報告を得るヘルパー関数
pub fn compile(program: &Node) -> (String, CompilationReport) {
    translate_to_string(program).expect("Translation should not abort")
}

/// 宣言と文のリストからプログラムを組み立てて翻訳するヘルパー関数
pub fn compile_program(decls: &[(&str, &str, usize)], stmts: Vec<Node>) -> (String, CompilationReport) {
    let tree = program(declarations(decls).unwrap(), statements(stmts).unwrap()).unwrap();
    compile(&tree)
}

/// 意味エラーなしで翻訳できることを確認するヘルパー関数
pub fn assert_compile_success(decls: &[(&str, &str, usize)], stmts: Vec<Node>) -> String {
    let (output, report) = compile_program(decls, stmts);
    assert!(report.is_success(), "Unexpected errors:\n{}", report.render());
    output
}

/// `main` の本体（`return 0;` の直前まで）を取り出す
pub fn main_body(output: &str) -> &str {
    let open = "int main() {\n";
    let start = output.find(open).expect("main should be emitted") + open.len();
    let end = output.rfind("\treturn 0;\n}\n").expect("main should be closed");
    &output[start..end]
}

#[cfg(test)]
mod control_flow_test;
#[cfg(test)]
mod expression_test;
