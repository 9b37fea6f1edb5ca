//! # Corpus 模块
//!
//! 逐行读写语料文件（UTF-8，一行一条）。

use std::fs;
use std::path::Path;

use crate::error::FileError;

/// 读取文件，每行一条，去掉行尾的 `\n` / `\r\n`
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, FileError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| FileError::read(path, &e))?;
    Ok(split_lines(&content))
}

/// 按行切分文本，末尾的换行不产生额外空行
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// 写入文件，每条一行并以 `\n` 结尾
pub fn write_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<(), FileError> {
    let path = path.as_ref();
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    fs::write(path, content).map_err(|e| FileError::write(path, &e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileAction;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\r\n\nc\n"), vec!["a", "b", "", "c"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.lin");
        write_lines(&path, &["qtype@1 count@0", ""]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "qtype@1 count@0\n\n"
        );
        assert_eq!(read_lines(&path).unwrap(), vec!["qtype@1 count@0", ""]);
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(dir.path().join("missing.mrl")).unwrap_err();
        assert_eq!(err.action, FileAction::Read);
        assert!(err.path.ends_with("missing.mrl"));
    }
}
