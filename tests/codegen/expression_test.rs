//! 式のコード生成テスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

/// `x := <expr>` を1文だけ翻訳し、代入文の行を返す
fn assignment_line(decls: &[(&str, &str, usize)], value: Node) -> String {
    let (output, _) = compile_program(decls, vec![assign("x", value, 3).unwrap()]);
    main_body(&output).to_string()
}

#[test_case("=", "y == 1"; "equality becomes double equals")]
#[test_case("!=", "y != 1"; "inequality passes through")]
#[test_case("<=", "y <= 1"; "less or equal passes through")]
#[test_case(">", "y > 1"; "greater passes through")]
fn test_comparison_operator_codegen(op: &str, expected: &str) {
    let value = compare(ident("y", 3).unwrap(), op, num("1", 3).unwrap(), 3).unwrap();
    let line = assignment_line(&[("x", "bool", 1), ("y", "int", 2)], value);
    assert_eq!(line, format!("\tx = {};\n", expected));
}

#[test_case("div", "/"; "div becomes slash")]
#[test_case("mod", "%"; "mod becomes percent")]
#[test_case("*", "*"; "times passes through")]
#[test_case("+", "+"; "plus passes through")]
#[test_case("-", "-"; "minus passes through")]
fn test_arithmetic_operator_codegen(op: &str, expected: &str) {
    let value = arith(num("7", 3).unwrap(), op, num("2", 3).unwrap(), 3).unwrap();
    let line = assignment_line(&[("x", "int", 1)], value);
    assert_eq!(line, format!("\tx = 7 {} 2;\n", expected));
}

#[test]
fn test_parenthesized_expression_codegen() {
    // (1 + 2) * 3
    let sum = arith(num("1", 3).unwrap(), "+", num("2", 3).unwrap(), 3).unwrap();
    let value = arith(paren(sum, 3).unwrap(), "*", num("3", 3).unwrap(), 3).unwrap();
    let line = assignment_line(&[("x", "int", 1)], value);
    assert_eq!(line, "\tx = (1 + 2) * 3;\n");
}

#[test]
fn test_read_int_codegen() {
    let line = assignment_line(&[("x", "int", 1)], read_int(3).unwrap());
    assert_eq!(line, "\tx = readInt();\n");
}

#[test]
fn test_bool_literals_are_verbatim() {
    let line = assignment_line(&[("x", "bool", 1)], boolean(true, 3).unwrap());
    assert_eq!(line, "\tx = true;\n");
}

#[test]
fn test_out_of_range_literal_is_still_emitted() {
    // 範囲外のリテラルは報告されるが、テキストはそのまま出力される
    let (output, report) = compile_program(
        &[("x", "int", 1)],
        vec![assign("x", num("2147483648", 3).unwrap(), 3).unwrap()],
    );

    assert_eq!(main_body(&output), "\tx = 2147483648;\n");
    assert_eq!(report.error_count(), 1);
}

#[test]
fn test_output_is_written_despite_errors() {
    // 意味エラーがあっても生成は最後まで行われる
    let (output, report) = compile_program(
        &[("x", "int", 1)],
        vec![
            assign("x", boolean(true, 3).unwrap(), 3).unwrap(),
            write_int(ident("missing", 4).unwrap(), 4).unwrap(),
            assign("x", num("5", 5).unwrap(), 5).unwrap(),
        ],
    );

    assert_eq!(
        main_body(&output),
        "\tx = true;\n\tprintf(\"%d\\n\", missing);\n\tx = 5;\n"
    );
    assert_eq!(report.error_count(), 2);
}
