//! # 值转义
//!
//! 线性序列以空格分隔 token，括号形式以 `(`、`)`、`,`、`'` 分帧。
//! 字符串值中出现这些字符时，写入 token 前替换为占位符，还原时再替换回来。
//! 占位符与既有 NLmaps 线性语料保持一致。

/// 空白的占位符
pub const SPACE: &str = "€";
/// `'` 的占位符
pub const APOSTROPHE: &str = "SAVEAPO";
/// `(` 的占位符
pub const BRACKET_OPEN: &str = "BRACKETOPEN";
/// `)` 的占位符
pub const BRACKET_CLOSE: &str = "BRACKETCLOSE";
/// `,` 的占位符
pub const COMMA: &str = "SAVECOMMA";

/// 把字符串值编码为可放入线性 token 的形式
///
/// 连续空白折叠为一个 `€`。
pub fn encode_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_space = false;

    for c in value.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push_str(SPACE);
            }
            in_space = true;
            continue;
        }
        in_space = false;

        match c {
            '\'' => out.push_str(APOSTROPHE),
            '(' => out.push_str(BRACKET_OPEN),
            ')' => out.push_str(BRACKET_CLOSE),
            ',' => out.push_str(COMMA),
            _ => out.push(c),
        }
    }

    out
}

/// [`encode_value`] 的逆操作
pub fn decode_value(symbol: &str) -> String {
    symbol
        .replace(APOSTROPHE, "'")
        .replace(BRACKET_OPEN, "(")
        .replace(BRACKET_CLOSE, ")")
        .replace(COMMA, ",")
        .replace(SPACE, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_special_characters() {
        assert_eq!(encode_value("McDonald's"), "McDonaldSAVEAPOs");
        assert_eq!(encode_value("M(c)Donalds"), "MBRACKETOPENcBRACKETCLOSEDonalds");
        assert_eq!(encode_value("japanese,italian"), "japaneseSAVECOMMAitalian");
        assert_eq!(encode_value("City of Edinburgh"), "City€of€Edinburgh");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(encode_value("Mc  \tDonalds"), "Mc€Donalds");
    }

    #[test]
    fn test_decode_restores_value() {
        for value in ["McDonald's", "M(c)Donalds", "japanese,italian", "Yorckstraße", "a b c"] {
            assert_eq!(decode_value(&encode_value(value)), value);
        }
    }
}
