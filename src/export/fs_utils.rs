// src/export/fs_utils.rs

use crate::errors::AppResult;
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Creates `dir` and any missing parents. A no-op when it already exists.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Creates the parent directory of a file path, if it has one.
pub(crate) fn ensure_parent(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) => ensure_dir(parent),
        None => Ok(()),
    }
}

/// Scrive `value` come JSON formattato (indentazione a 2 spazi, UTF-8,
/// caratteri non ASCII lasciati in chiaro).
pub(crate) fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Path of `target` as seen from the directory holding `anchor`, with `/`
/// separators and `..` segments where `target` lies outside it. Relative
/// inputs are resolved against the current directory first.
pub(crate) fn relative_to_parent(anchor: &Path, target: &Path) -> AppResult<String> {
    let cwd = std::env::current_dir()?;
    Ok(relative_from(&cwd, anchor, target))
}

fn relative_from(cwd: &Path, anchor: &Path, target: &Path) -> String {
    let anchor = lexical_normalize(&cwd.join(anchor));
    let target = lexical_normalize(&cwd.join(target));
    let base = anchor.parent().unwrap_or(anchor.as_path());

    let base_parts: Vec<Component<'_>> = base.components().collect();
    let target_parts: Vec<Component<'_>> = target.components().collect();

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // different drive or root, no relative form exists
    if common == 0 {
        return join_slash(&target);
    }

    let ups = base_parts.len() - common;
    let mut parts: Vec<String> = vec!["..".to_string(); ups];
    parts.extend(
        target_parts[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}

/// Drops `.` and folds `..` into the preceding segment, without touching
/// the filesystem.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn join_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(anchor: &str, target: &str) -> String {
        relative_from(Path::new("/work"), Path::new(anchor), Path::new(target))
    }

    #[test]
    fn relative_paths_use_forward_slashes() {
        assert_eq!(rel("manifest.json", "incidents.bundle.json"), "incidents.bundle.json");
        assert_eq!(rel("site/manifest.json", "site/data/all.json"), "data/all.json");
    }

    #[test]
    fn current_dir_segments_are_ignored() {
        assert_eq!(rel("site/manifest.json", "./site/b.json"), "b.json");
        assert_eq!(rel("./site/manifest.json", "site/./b.json"), "b.json");
    }

    #[test]
    fn targets_outside_the_manifest_dir_climb_up() {
        assert_eq!(rel("site/manifest.json", "other/b.json"), "../other/b.json");
        assert_eq!(rel("a/b/manifest.json", "c.json"), "../../c.json");
        assert_eq!(rel("site/manifest.json", "site/../x/b.json"), "../x/b.json");
    }

    #[test]
    fn absolute_and_relative_inputs_share_a_base() {
        assert_eq!(rel("/work/site/manifest.json", "site/b.json"), "b.json");
        assert_eq!(rel("site/manifest.json", "/work/site/b.json"), "b.json");
        assert_eq!(rel("/srv/www/manifest.json", "b.json"), "../../work/b.json");
    }

    #[test]
    fn pretty_json_keeps_non_ascii() {
        let path = std::env::temp_dir().join("rincidents_fs_utils_pretty.json");
        write_pretty_json(&path, &serde_json::json!({ "country": "Perú" })).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"country\": \"Perú\"\n}");
        fs::remove_file(&path).ok();
    }
}
