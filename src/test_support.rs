use crate::diff::Hunk;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a hunk whose body is `lines`, each terminated by `\n`.
pub(crate) fn hunk(orig_start_line: usize, new_start_line: usize, lines: &[&str]) -> Hunk {
    let mut body = lines.join("\n");
    body.push('\n');
    Hunk::new(orig_start_line, new_start_line, body)
}

/// Write `content` to `name` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for as long as the file is used.
pub(crate) fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
