use std::fmt::{self, Write};

// ======================== 核心：零堆分配字符串格式化 ========================
/// 空白字符折叠 + 截断 - 零堆分配的日志预览核心函数
/// 适用场景：错误信息/告警中携带原始输入片段（键名、标签、JSON片段）
/// 特性：无String创建，遍历到最大长度立即终止，连续空白折叠为单个空格
#[inline(always)]
pub fn preview_compact(s: &str, max_len: usize) -> impl fmt::Display + '_ {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl fmt::Display for CompactView<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            for ch in self.source.chars() {
                if char_count >= self.max_length {
                    // 超长时补省略号
                    if char_count == self.max_length {
                        f.write_str("…")?;
                    }
                    break;
                }

                if ch.is_whitespace() {
                    if !last_was_whitespace {
                        f.write_str(" ")?;
                        char_count += 1;
                        last_was_whitespace = true;
                    }
                } else {
                    f.write_char(ch)?;
                    char_count += 1;
                    last_was_whitespace = false;
                }
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}
