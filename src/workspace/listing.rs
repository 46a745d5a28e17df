use crate::workspace::confine::confine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
    pub size: u64,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryListing {
    pub path: String,
    pub items: Vec<DirectoryEntry>,
    pub message: String,
}

fn created_timestamp(metadata: &fs::Metadata) -> String {
    metadata
        .created()
        .map(|created| DateTime::<Utc>::from(created).to_rfc3339())
        .unwrap_or_default()
}

pub fn read_directory(root: &Path, raw_path: &str) -> DirectoryListing {
    let target = confine(root, raw_path);
    let display = target.display().to_string();

    let entries = match fs::read_dir(&target) {
        Ok(entries) => entries,
        Err(err) => {
            return DirectoryListing {
                path: display.clone(),
                items: Vec::new(),
                message: format!("failed to read directory {display}: {err}"),
            }
        }
    };

    let mut items = Vec::new();
    for entry in entries.flatten() {
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(_) => continue,
        };
        items.push(DirectoryEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path().display().to_string(),
            is_directory: metadata.is_dir(),
            size: metadata.len(),
            created_at: created_timestamp(&metadata),
        });
    }
    items.sort_by(|left, right| left.name.cmp(&right.name));

    DirectoryListing {
        message: format!("listed {} entries", items.len()),
        path: display,
        items,
    }
}
