//! Case storage API.
//!
//! Layout per case: `manifest.json`, `keys.json` (the key list) and
//! `summary.jsonl` (one `MinistepRecord` per line).

use crate::types::{CaseManifest, MinistepRecord, SummaryKey, SummaryTable};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct SummaryStore {
    root_dir: PathBuf,
}

impl SummaryStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store next to a deck file, under `.wellsum/cases`.
    pub fn for_deck(deck_path: &Path) -> ResultsResult<Self> {
        let deck_dir = deck_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "deck path has no parent directory".to_string(),
            })?;
        let cases_dir = deck_dir.join(".wellsum").join("cases");
        Self::new(cases_dir)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn case_dir(&self, case_id: &str) -> PathBuf {
        self.root_dir.join(case_id)
    }

    pub fn has_case(&self, case_id: &str) -> bool {
        self.case_dir(case_id).join("manifest.json").exists()
    }

    pub fn save_case(&self, manifest: &CaseManifest, table: &SummaryTable) -> ResultsResult<()> {
        let case_dir = self.case_dir(&manifest.case_id);
        fs::create_dir_all(&case_dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(case_dir.join("manifest.json"), manifest_json)?;

        let keys_json = serde_json::to_string_pretty(table.keys())?;
        fs::write(case_dir.join("keys.json"), keys_json)?;

        let mut summary_content = String::new();
        for record in &table.ministeps {
            let line = serde_json::to_string(record)?;
            summary_content.push_str(&line);
            summary_content.push('\n');
        }
        fs::write(case_dir.join("summary.jsonl"), summary_content)?;

        tracing::debug!(
            case_id = %manifest.case_id,
            keys = table.keys().len(),
            ministeps = table.ministeps.len(),
            "saved summary case"
        );
        Ok(())
    }

    pub fn load_manifest(&self, case_id: &str) -> ResultsResult<CaseManifest> {
        let manifest_path = self.case_dir(case_id).join("manifest.json");

        if !manifest_path.exists() {
            return Err(ResultsError::CaseNotFound {
                case_id: case_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn load_table(&self, case_id: &str) -> ResultsResult<SummaryTable> {
        let case_dir = self.case_dir(case_id);
        let keys_path = case_dir.join("keys.json");
        let summary_path = case_dir.join("summary.jsonl");

        if !keys_path.exists() || !summary_path.exists() {
            return Err(ResultsError::CaseNotFound {
                case_id: case_id.to_string(),
            });
        }

        let keys: Vec<SummaryKey> = serde_json::from_str(&fs::read_to_string(keys_path)?)?;

        let content = fs::read_to_string(summary_path)?;
        let mut ministeps = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let record: MinistepRecord = serde_json::from_str(line)?;
                ministeps.push(record);
            }
        }

        let mut table = SummaryTable::new(keys);
        table.ministeps = ministeps;
        Ok(table)
    }

    /// Manifests of every stored case named `name`.
    pub fn list_cases(&self, name: &str) -> ResultsResult<Vec<CaseManifest>> {
        let mut cases = Vec::new();

        if !self.root_dir.exists() {
            return Ok(cases);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let case_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&case_id) {
                    if manifest.name == name {
                        cases.push(manifest);
                    }
                }
            }
        }

        Ok(cases)
    }

    pub fn delete_case(&self, case_id: &str) -> ResultsResult<()> {
        let case_dir = self.case_dir(case_id);
        if case_dir.exists() {
            fs::remove_dir_all(case_dir)?;
        }
        Ok(())
    }
}
