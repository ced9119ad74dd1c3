//! 制御フローのコード生成テスト

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_if_without_else_codegen() {
    let output = assert_compile_success(
        &[("b", "bool", 2)],
        vec![if_then(
            ident("b", 4).unwrap(),
            vec![write_int(num("1", 5).unwrap(), 5).unwrap()],
            4,
        )
        .unwrap()],
    );

    assert_eq!(main_body(&output), "\tif (b) {\n\t\tprintf(\"%d\\n\", 1);\n\t}\n");
}

#[test]
fn test_empty_else_is_omitted() {
    // else節があっても本体が空なら else ブロックは出力しない
    let output = assert_compile_success(
        &[("b", "bool", 2)],
        vec![if_else(
            ident("b", 4).unwrap(),
            vec![write_int(num("1", 5).unwrap(), 5).unwrap()],
            vec![],
            4,
        )
        .unwrap()],
    );

    assert!(!output.contains("else"));
}

#[test]
fn test_empty_bodies_stay_well_formed() {
    let output = assert_compile_success(
        &[("b", "bool", 2)],
        vec![
            if_then(ident("b", 4).unwrap(), vec![], 4).unwrap(),
            while_do(ident("b", 5).unwrap(), vec![], 5).unwrap(),
        ],
    );

    assert_eq!(main_body(&output), "\tif (b) {\n\t}\n\twhile (b) {\n\t}\n");
}

#[test]
fn test_nested_blocks_indentation() {
    // 深さ d の文はちょうど d 個のタブで始まる
    let output = assert_compile_success(
        &[("x", "int", 2), ("b", "bool", 3)],
        vec![
            while_do(
                ident("b", 5).unwrap(),
                vec![
                    if_else(
                        compare(ident("x", 6).unwrap(), "=", num("0", 6).unwrap(), 6).unwrap(),
                        vec![
                            while_do(
                                ident("b", 7).unwrap(),
                                vec![assign("b", boolean(false, 8).unwrap(), 8).unwrap()],
                                7,
                            )
                            .unwrap(),
                        ],
                        vec![assign("x", num("0", 11).unwrap(), 11).unwrap()],
                        6,
                    )
                    .unwrap(),
                    write_int(ident("x", 13).unwrap(), 13).unwrap(),
                ],
                5,
            )
            .unwrap(),
            write_int(ident("x", 15).unwrap(), 15).unwrap(),
        ],
    );

    let expected = "\twhile (b) {\n\
\t\tif (x == 0) {\n\
\t\t\twhile (b) {\n\
\t\t\t\tb = false;\n\
\t\t\t}\n\
\t\t} else {\n\
\t\t\tx = 0;\n\
\t\t}\n\
\t\tprintf(\"%d\\n\", x);\n\
\t}\n\
\tprintf(\"%d\\n\", x);\n";

    assert_eq!(main_body(&output), expected);
}

#[test]
fn test_statement_after_block_returns_to_outer_depth() {
    let output = assert_compile_success(
        &[("x", "int", 2)],
        vec![
            while_do(
                compare(ident("x", 4).unwrap(), "<", num("3", 4).unwrap(), 4).unwrap(),
                vec![assign("x", arith(ident("x", 5).unwrap(), "+", num("1", 5).unwrap(), 5).unwrap(), 5).unwrap()],
                4,
            )
            .unwrap(),
            assign("x", num("7", 7).unwrap(), 7).unwrap(),
        ],
    );

    assert!(main_body(&output).ends_with("\t}\n\tx = 7;\n"));
}
