//! 未宣言変数のセマンティック解析テスト

use super::*;

#[test]
fn test_undeclared_reference_counts_once() {
    assert_diagnostics(
        &[],
        vec![write_int(ident("z", 4).unwrap(), 4).unwrap()],
        &["ERROR[line 4]: Undeclared Variable 'z'"],
    );
}

#[test]
fn test_undeclared_guard_counts_once() {
    assert_diagnostics(
        &[],
        vec![while_do(ident("z", 3).unwrap(), vec![], 3).unwrap()],
        &["ERROR[line 3]: Undeclared Variable 'z'"],
    );
}

#[test]
fn test_undeclared_assignment_target() {
    assert_diagnostics(
        &[],
        vec![assign("y", num("1", 2).unwrap(), 2).unwrap()],
        &["ERROR[line 2]: Undeclared Variable 'y'"],
    );
}

#[test]
fn test_each_reference_is_reported() {
    // 同じ名前でも参照ごとに1回ずつ報告される
    let value = arith(ident("z", 4).unwrap(), "+", ident("z", 4).unwrap(), 4).unwrap();
    assert_diagnostics(
        &[],
        vec![write_int(value, 4).unwrap()],
        &[
            "ERROR[line 4]: Undeclared Variable 'z'",
            "ERROR[line 4]: Undeclared Variable 'z'",
        ],
    );
}

#[test]
fn test_traversal_continues_after_undeclared_use() {
    // 後続の文も生成され、検査される
    let tree = program(
        declarations(&[("x", "int", 2)]).unwrap(),
        statements(vec![
            if_then(
                ident("ghost", 4).unwrap(),
                vec![assign("x", num("1", 5).unwrap(), 5).unwrap()],
                4,
            )
            .unwrap(),
            assign("x", boolean(true, 7).unwrap(), 7).unwrap(),
        ])
        .unwrap(),
    )
    .unwrap();

    let (output, report) = translate_to_string(&tree).unwrap();
    pretty_assertions::assert_eq!(
        diagnostic_lines(&report),
        vec![
            "ERROR[line 4]: Undeclared Variable 'ghost'",
            "ERROR[line 7]: Type mismatch in assignment to 'x'. Expected 'int' but got 'bool'",
        ]
    );
    assert!(output.contains("\tif (ghost) {\n\t\tx = 1;\n\t}\n\tx = true;\n"));
}

#[test]
fn test_declared_names_do_not_leak_between_runs() {
    // 状態は1回の翻訳ごとに作り直される
    assert_analysis_success(&[("x", "int", 2)], vec![assign("x", num("1", 4).unwrap(), 4).unwrap()]);
    assert_diagnostics(
        &[],
        vec![assign("x", num("1", 4).unwrap(), 4).unwrap()],
        &["ERROR[line 4]: Undeclared Variable 'x'"],
    );
}
