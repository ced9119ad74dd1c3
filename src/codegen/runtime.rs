//! 生成するCコードの固定部分
//!
//! TL13の `readInt` にはCの直接の対応物がないので、前置部で補助関数として定義する。

/// 字下げ1段分
pub const INDENT: &str = "\t";

/// 標準ヘッダと `readInt` 補助関数
pub const PRELUDE: &str = "#include <stdio.h>\n\
#include <stdlib.h>\n\
#include <stdbool.h>\n\
\n\
int readInt() {\n\
\tint x;\n\
\tscanf(\"%d\", &x);\n\
\treturn x;\n\
}\n\
\n";

/// 宣言部の後に置く `main` の開始
pub const MAIN_OPEN: &str = "\nint main() {\n";

/// `main` 本体の最後の文（本体と同じ深さで字下げされる）
pub const MAIN_RETURN: &str = "return 0;\n";

pub const MAIN_CLOSE: &str = "}\n";

/// `readInt` 補助関数の呼び出し
pub const READ_INT_CALL: &str = "readInt()";

/// `writeInt` に対応する printf の書き出し部
pub const WRITE_INT_OPEN: &str = "printf(\"%d\\n\", ";

pub const WRITE_INT_CLOSE: &str = ");\n";

/// 32ビット符号付き整数で表せる最大のリテラル
pub const MAX_INT_LITERAL: u64 = i32::MAX as u64;
