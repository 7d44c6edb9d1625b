//! Seed data loading
//!
//! The registry starts from a JSON array of user records. Candidate files
//! are tried in order and the first one that exists is read; a missing or
//! broken seed never stops the service from starting. A relative candidate
//! is looked up in the working directory, then next to the executable.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::User;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("no seed file found (tried {0:?})")]
    NotFound(Vec<PathBuf>),

    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid seed data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// First candidate that exists on disk.
pub fn resolve_seed_path(candidates: &[PathBuf]) -> Option<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_in(candidates, exe_dir.as_deref())
}

fn resolve_in(candidates: &[PathBuf], exe_dir: Option<&Path>) -> Option<PathBuf> {
    candidates
        .iter()
        .flat_map(|candidate| search_locations(candidate, exe_dir))
        .find(|path| path.exists())
}

fn search_locations(candidate: &Path, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut locations = vec![candidate.to_path_buf()];
    if let Some(dir) = exe_dir.filter(|_| candidate.is_relative()) {
        locations.push(dir.join(candidate));
    }
    locations
}

/// Parse a seed document: a JSON array of record objects.
///
/// Entries that are not valid users, or repeat an id seen earlier, are
/// skipped with a warning.
pub fn parse_seed(raw: &str) -> Result<Vec<User>, serde_json::Error> {
    let entries: Vec<Value> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    let mut users = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<User>(entry) {
            Ok(user) if seen.insert(user.id.clone()) => users.push(user),
            Ok(user) => warn!(index, id = %user.id, "Skipping seed record with duplicate id"),
            Err(e) => warn!(index, error = %e, "Skipping malformed seed record"),
        }
    }

    Ok(users)
}

pub fn load_seed(candidates: &[PathBuf]) -> Result<Vec<User>, SeedError> {
    let path = resolve_seed_path(candidates)
        .ok_or_else(|| SeedError::NotFound(candidates.to_vec()))?;

    let raw = std::fs::read_to_string(&path).map_err(|source| SeedError::Io {
        path: path.clone(),
        source,
    })?;

    let users = parse_seed(&raw).map_err(|source| SeedError::Parse {
        path: path.clone(),
        source,
    })?;

    info!("Loaded {} seed records from {}", users.len(), path.display());
    Ok(users)
}

/// Like [`load_seed`], but falls back to an empty registry.
pub fn load_seed_or_empty(candidates: &[PathBuf]) -> Vec<User> {
    load_seed(candidates).unwrap_or_else(|e| {
        warn!("Failed to load seed data: {}. Starting with an empty registry.", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use std::io::Write;

    const SEED: &str = r#"[
        {"id": "a1", "name": "张三", "age": 28, "email": "zhang@example.com", "role": "admin"},
        {"id": "b2", "name": "Li", "age": 35, "email": "li@example.com", "role": "viewer"}
    ]"#;

    fn write_seed(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parses_records_in_order() {
        let users = parse_seed(SEED).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "张三");
        assert_eq!(users[0].role, UserRole::Admin);
        assert_eq!(users[1].id, "b2");
    }

    #[test]
    fn skips_malformed_and_duplicate_records() {
        let raw = r#"[
            {"id": "a1", "name": "Ann", "age": 30, "email": "a@b.c", "role": "admin"},
            {"id": "a1", "name": "Dup", "age": 30, "email": "d@b.c", "role": "viewer"},
            {"id": "c3", "name": "Bad", "age": 30, "email": "x@b.c", "role": "root"},
            {"name": "NoId"},
            {"id": "d4", "name": "Dee", "age": 40, "email": "d@e.f", "role": "editor"}
        ]"#;

        let users = parse_seed(raw).unwrap();
        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["a1", "d4"]);
        assert_eq!(users[0].name, "Ann");
    }

    #[test]
    fn rejects_non_array_document() {
        assert!(parse_seed(r#"{"users": []}"#).is_err());
        assert!(parse_seed("not json").is_err());
    }

    #[test]
    fn prefers_first_existing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = write_seed(&dir, "api_test_data.json", "[]");
        let preferred = write_seed(&dir, "api_test_data_with_chinese.json", SEED);

        let users = load_seed(&[preferred, fallback]).unwrap();
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn falls_back_when_preferred_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("api_test_data_with_chinese.json");
        let fallback = write_seed(&dir, "api_test_data.json", SEED);

        assert_eq!(resolve_seed_path(&[missing.clone(), fallback.clone()]), Some(fallback.clone()));
        assert_eq!(load_seed(&[missing, fallback]).unwrap().len(), 2);
    }

    #[test]
    fn missing_or_broken_seed_yields_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nothing.json");
        assert!(matches!(
            load_seed(&[missing.clone()]),
            Err(SeedError::NotFound(_))
        ));
        assert!(load_seed_or_empty(&[missing]).is_empty());

        let broken = write_seed(&dir, "broken.json", "[{");
        assert!(matches!(load_seed(&[broken.clone()]), Err(SeedError::Parse { .. })));
        assert!(load_seed_or_empty(&[broken]).is_empty());
    }

    #[test]
    fn relative_candidates_are_also_looked_up_next_to_executable() {
        let exe_dir = Path::new("/opt/registry/bin");
        assert_eq!(
            search_locations(Path::new("seed.json"), Some(exe_dir)),
            [PathBuf::from("seed.json"), exe_dir.join("seed.json")]
        );
        assert_eq!(
            search_locations(Path::new("/data/seed.json"), Some(exe_dir)),
            [PathBuf::from("/data/seed.json")]
        );
        assert_eq!(
            search_locations(Path::new("seed.json"), None),
            [PathBuf::from("seed.json")]
        );
    }

    #[test]
    fn resolves_relative_candidate_in_executable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let name = "registry_seed_next_to_exe_7f3a.json";
        let expected = write_seed(&dir, name, SEED);

        let found = resolve_in(&[PathBuf::from(name)], Some(dir.path()));
        assert_eq!(found, Some(expected));
    }
}
