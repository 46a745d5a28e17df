use crate::workspace::confine::confine;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

impl WriteOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

pub fn materialize_file(
    root: &Path,
    file_name: &str,
    content: &str,
) -> std::io::Result<Materialized> {
    let path = confine(root, file_name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::read(&path) {
        Ok(existing) if existing == content.as_bytes() => Ok(Materialized {
            path,
            outcome: WriteOutcome::Unchanged,
        }),
        Ok(_) => {
            fs::write(&path, content)?;
            Ok(Materialized {
                path,
                outcome: WriteOutcome::Updated,
            })
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            fs::write(&path, content)?;
            Ok(Materialized {
                path,
                outcome: WriteOutcome::Created,
            })
        }
        Err(err) => Err(err),
    }
}
