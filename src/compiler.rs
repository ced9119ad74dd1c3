//! コンパイラのメイン処理モジュール
//!
//! 1回の翻訳に必要な状態（シンボルテーブルとエラーコレクター）を
//! 明示的なコンテキストとして保持し、走査後の終了処理を行います。

use crate::analyzer::{SymbolTable, Type};
use crate::ast::Node;
use crate::codegen::CodeGenerator;
use crate::error::{CompileResult, Diagnostic, ErrorCollector, SemanticError};
use std::io::Write;

/// コンパイル状態を管理する構造体
#[derive(Debug, Default)]
pub struct CompilationState {
    pub symbols: SymbolTable,
    pub error_collector: ErrorCollector,
}

impl CompilationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 意味エラーを記録
    pub fn report(&mut self, line: usize, error: SemanticError) {
        self.error_collector.add_error(line, error);
    }

    /// 変数の型を検索
    ///
    /// 未宣言なら診断を記録して [`Type::Undefined`] を返し、走査は続ける。
    pub fn lookup(&mut self, name: &str, line: usize) -> Type {
        match self.symbols.get(name) {
            Some(symbol) => symbol.ty,
            None => {
                self.report(
                    line,
                    SemanticError::UndeclaredVariable {
                        name: name.to_string(),
                    },
                );
                Type::Undefined
            }
        }
    }

    /// エラーがあるかチェック
    pub fn has_errors(&self) -> bool {
        self.error_collector.has_errors()
    }

    /// エラー数を取得
    pub fn error_count(&self) -> usize {
        self.error_collector.error_count()
    }

    /// 走査を終えた状態を報告に変換する
    ///
    /// シンボルテーブルはここで解放される。
    pub fn finish(self) -> CompilationReport {
        let CompilationState {
            symbols,
            error_collector,
        } = self;
        log::debug!("releasing {} symbol(s)", symbols.len());
        drop(symbols);

        CompilationReport {
            diagnostics: error_collector.into_errors(),
        }
    }
}

/// 1回の翻訳の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationReport {
    diagnostics: Vec<Diagnostic>,
}

impl CompilationReport {
    /// 検出順の診断
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// 失敗時の要約行
    pub fn summary(&self) -> Option<String> {
        if self.is_success() {
            None
        } else {
            Some(format!(
                "Compilation failed with {} semantic error(s).",
                self.error_count()
            ))
        }
    }

    /// 診断行と要約行を診断ストリームの形式で並べる
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self.diagnostics.iter().map(Diagnostic::to_string).collect();
        if let Some(summary) = self.summary() {
            lines.push(summary);
        }
        lines.join("\n")
    }
}

/// 構文木を1回走査してCのソースを `out` に書き出す
///
/// 意味エラーがあっても出力は最後まで書かれ、取り消されない。
/// `Err` が返るのは構文木が不正な場合と書き込みに失敗した場合だけ。
pub fn translate<W: Write>(program: &Node, out: W) -> CompileResult<CompilationReport> {
    let mut state = CompilationState::new();
    {
        let mut generator = CodeGenerator::new(&mut state, out);
        generator.generate(program)?;
        generator.flush()?;
    }

    let report = state.finish();
    log::debug!("translation finished with {} error(s)", report.error_count());
    Ok(report)
}

/// 出力を文字列として受け取る版
pub fn translate_to_string(program: &Node) -> CompileResult<(String, CompilationReport)> {
    let mut buffer = Vec::new();
    let report = translate(program, &mut buffer)?;
    let output = String::from_utf8_lossy(&buffer).into_owned();
    Ok((output, report))
}
