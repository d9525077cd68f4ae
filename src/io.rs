use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Stream `value` as pretty JSON into `path`, followed by a newline.
///
/// Missing parent directories are created first.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let describe = |what: &str, e: &dyn std::fmt::Display| format!("{what} {}: {e}", path.display());
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| describe("Failed to create parent of", &e))?
        }
        _ => {}
    }
    let file = File::create(path).map_err(|e| describe("Failed to create", &e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(|e| describe("Failed to serialize JSON into", &e))?;
    out.write_all(b"\n")
        .and_then(|()| out.flush())
        .map_err(|e| describe("Failed to write", &e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::StageTiming;

    #[test]
    fn writes_into_fresh_directory() {
        let dir = std::env::temp_dir().join(format!("axis2d-io-{}", std::process::id()));
        let path = dir.join("nested").join("timing.json");
        let timing = StageTiming {
            stage: "build".to_string(),
            elapsed_ms: 1.5,
        };
        write_json_file(&path, &timing).expect("writable temp dir");
        let text = fs::read_to_string(&path).expect("file written");
        assert!(text.ends_with('\n'));
        assert!(text.contains("\"elapsedMs\": 1.5"), "got {text}");
        let _ = fs::remove_dir_all(&dir);
    }
}
