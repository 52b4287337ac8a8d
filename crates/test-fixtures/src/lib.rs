//! Test fixture loader for snapshot documents, golden traversal cases, and
//! synthetic network generators shared by the workspace's tests and benches.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use affinet_core::{MemberRecord, NetworkSnapshot, TooltipRecord};

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw text.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load a snapshot document through the production parser.
pub fn load_snapshot(relative_path: &str) -> NetworkSnapshot {
    let text = load_fixture_text(relative_path);
    NetworkSnapshot::from_json(&text)
        .unwrap_or_else(|e| panic!("Failed to parse snapshot {relative_path}: {e}"))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// A golden file: one snapshot plus expected layout and traversals.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldenTraversals {
    /// Snapshot fixture path, relative to the fixtures root.
    pub snapshot: String,
    pub roots: Vec<i64>,
    /// Member id (as a JSON object key) → level.
    pub levels: HashMap<String, usize>,
    pub cases: Vec<TraversalCase>,
}

/// One expected bounded traversal. `None` budgets mean unbounded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalCase {
    pub description: String,
    pub root: i64,
    pub max_depth: Option<usize>,
    pub max_nodes: Option<usize>,
    pub expected_order: Vec<i64>,
    pub expected_levels: Vec<usize>,
}

// --- Synthetic networks ---

/// `[{1,null},{2,1},{3,1},{4,2}]`, the four-member network used throughout.
pub fn scenario_records() -> Vec<MemberRecord> {
    vec![
        MemberRecord::new(1, None),
        MemberRecord::new(2, Some(1)),
        MemberRecord::new(3, Some(1)),
        MemberRecord::new(4, Some(2)),
    ]
}

/// A single chain `0 ← 1 ← … ← len-1`.
pub fn chain(len: usize) -> Vec<MemberRecord> {
    (0..len as i64)
        .map(|i| MemberRecord::new(i, if i == 0 { None } else { Some(i - 1) }))
        .collect()
}

/// A complete `fanout`-ary network of `members` members rooted at 0, ids in
/// breadth-first order, each with a name and account attribute.
pub fn brokerage_network(members: usize, fanout: usize) -> NetworkSnapshot {
    let fanout = fanout.max(1) as i64;
    let records = (0..members as i64)
        .map(|i| {
            let parent = if i == 0 { None } else { Some((i - 1) / fanout) };
            MemberRecord::new(i, parent)
                .with_attribute("name", format!("Member {i}"))
                .with_attribute("account", format!("AC-{i:06}"))
        })
        .collect();
    let tooltips = (0..members as i64)
        .step_by(3)
        .map(|i| TooltipRecord::new(i).with_attribute("status", "Active"))
        .collect();
    NetworkSnapshot::new(records, tooltips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "fixtures directory not found");
    }

    #[test]
    fn all_snapshot_files_parse() {
        let files = list_fixtures("snapshots");
        assert!(files.len() >= 5, "expected snapshot fixtures, found {}", files.len());
        for file in files {
            let name = file.file_name().unwrap().to_string_lossy().to_string();
            let snapshot = load_snapshot(&format!("snapshots/{name}"));
            assert!(!snapshot.records.is_empty(), "{name} has no records");
        }
    }

    #[test]
    fn golden_traversals_reference_existing_snapshot() {
        let golden: GoldenTraversals = load_fixture("golden/brokerage_traversals.json");
        assert!(fixture_exists(&golden.snapshot));
        assert!(!golden.cases.is_empty());
        for case in &golden.cases {
            assert_eq!(case.expected_order.len(), case.expected_levels.len(), "{}", case.description);
        }
    }

    #[test]
    fn generated_network_has_requested_shape() {
        let snapshot = brokerage_network(13, 3);
        assert_eq!(snapshot.records.len(), 13);
        assert_eq!(snapshot.records[4].parent_id.map(|p| p.0), Some(1));
        assert_eq!(chain(3)[2].parent_id.map(|p| p.0), Some(1));
    }
}
