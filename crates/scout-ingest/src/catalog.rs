//! Source catalog: which buyer datasets exist, where their files live, and
//! how much their records are trusted during ranking.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// One configured buyer dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Stable logical identifier, used as the record `source` field and as
    /// the key of the ranking weight table.
    pub id: String,
    /// File name the dataset is distributed under.
    pub filename: String,
    /// Ranking-only trust/freshness bonus added to every record's score.
    #[serde(default)]
    pub weight: i32,
}

/// The set of datasets one search runs over.
///
/// Ships with the six public Korean trade datasets as defaults; a JSON file
/// with the same shape can replace the whole set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCatalog {
    pub sources: Vec<SourceSpec>,
}

impl Default for SourceCatalog {
    fn default() -> Self {
        let sources = [
            (
                "KOTRA_해외바이어현황_20240829",
                "대한무역투자진흥공사_해외바이어 현황_20240829.csv",
                4,
            ),
            (
                "조달청_해외조달_업체물품_20250821",
                "조달청_해외조달_업체물품_20250821.csv",
                3,
            ),
            (
                "중진공_국가별해외바이어수_20250711",
                "중소벤처기업진흥공단_온라인수출플랫폼에 등록된 국가별 해외바이어 수_20250711.csv",
                0,
            ),
            (
                "중진공_해외바이어구매오퍼_20241231",
                "중소벤처기업진흥공단_해외바이어 구매오퍼 정보_20241231.csv",
                6,
            ),
            (
                "중진공_해외바이어인콰이어리_20241230",
                "중소벤처기업진흥공단_해외바이어 인콰이어리 신청_20241230.csv",
                6,
            ),
            (
                "무보_화장품바이어_20200812",
                "한국무역보험공사_화장품 바이어 정보_20200812.csv",
                2,
            ),
        ]
        .into_iter()
        .map(|(id, filename, weight)| SourceSpec {
            id: id.to_string(),
            filename: filename.to_string(),
            weight,
        })
        .collect();
        Self { sources }
    }
}

impl SourceCatalog {
    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| IngestError::CatalogRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| IngestError::CatalogFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Ranking weight per source id.
    pub fn weights(&self) -> BTreeMap<String, i32> {
        self.sources
            .iter()
            .map(|spec| (spec.id.clone(), spec.weight))
            .collect()
    }

    /// Resolve every source against a data directory. Absence is not an
    /// error; each entry carries `None` when no file was found.
    pub fn resolve(&self, data_dir: &Path) -> Vec<ResolvedSource> {
        self.sources
            .iter()
            .map(|spec| ResolvedSource {
                path: resolve_source_file(data_dir, &spec.filename),
                spec: spec.clone(),
            })
            .collect()
    }
}

/// A catalog entry with its resolved file path, if any.
#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub spec: SourceSpec,
    pub path: Option<PathBuf>,
}

/// Locate a dataset file under a data directory.
///
/// Checks the conventional spots first (`.`, `data/`, `datasets/`), then
/// walks the directory tree comparing file names.
pub fn resolve_source_file(data_dir: &Path, filename: &str) -> Option<PathBuf> {
    for dir in ["", "data", "datasets"] {
        let candidate = if dir.is_empty() {
            data_dir.join(filename)
        } else {
            data_dir.join(dir).join(filename)
        };
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    let found = find_by_name(data_dir, filename);
    if found.is_none() {
        debug!(filename, dir = %data_dir.display(), "source file not found");
    }
    found
}

fn find_by_name(dir: &Path, filename: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name == filename)
        {
            return Some(path);
        }
    }
    subdirs.sort();
    for subdir in subdirs {
        if let Some(found) = find_by_name(&subdir, filename) {
            return Some(found);
        }
    }
    None
}
