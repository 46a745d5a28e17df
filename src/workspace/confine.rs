use std::path::{Path, PathBuf};

pub fn confine(root: &Path, raw: &str) -> PathBuf {
    let normalized = raw.replace('\\', "/");
    let mut segments: Vec<&str> = normalized
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect();

    // A repeated root segment in the input is redundant nesting; everything
    // up to and including its first occurrence belongs to the root itself.
    if let Some(root_name) = root.file_name().and_then(|value| value.to_str()) {
        if let Some(index) = segments.iter().position(|segment| *segment == root_name) {
            segments.drain(..=index);
        }
    }

    let mut confined = root.to_path_buf();
    for segment in segments {
        confined.push(segment);
    }
    confined
}
