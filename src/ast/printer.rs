//! デバッグ用の構文木表示

use super::node::Node;

impl Node {
    /// 1ノード1行、深さごとに空白2つで字下げした木を返す
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(self.kind().name());
        if let Some(text) = self.text() {
            out.push_str(&format!(" ({})", text));
        }
        out.push('\n');

        for child in self.children() {
            child.render_into(out, depth + 1);
        }
    }
}
