//! Editor settings - the user-configurable knobs outside the content model.

use serde::{Deserialize, Serialize};

/// Editor configuration, persisted under the `settings` blob key.
///
/// Delays are milliseconds of quiet time before a deferred save or export
/// runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorSettings {
    /// Target id the exported document is keyed by (`game_world:<id>`).
    pub export_target_id: String,
    /// Base URL of an optional remote target; empty disables remote pushes.
    pub target_rest_root: String,
    /// Filename offered when downloading the content bundle.
    pub download_file_name: String,
    pub save_delay: u64,
    pub export_delay: u64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            export_target_id: "default".to_string(),
            target_rest_root: String::new(),
            download_file_name: "game-world.ces.json".to_string(),
            save_delay: 5000,
            export_delay: 5000,
        }
    }
}

impl EditorSettings {
    /// Shallow-merge a partial settings record.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(export_target_id) = patch.export_target_id {
            self.export_target_id = export_target_id;
        }
        if let Some(target_rest_root) = patch.target_rest_root {
            self.target_rest_root = target_rest_root;
        }
        if let Some(download_file_name) = patch.download_file_name {
            self.download_file_name = download_file_name;
        }
        if let Some(save_delay) = patch.save_delay {
            self.save_delay = save_delay;
        }
        if let Some(export_delay) = patch.export_delay {
            self.export_delay = export_delay;
        }
    }
}

/// Partial settings record for shallow-merge updates.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub export_target_id: Option<String>,
    pub target_rest_root: Option<String>,
    pub download_file_name: Option<String>,
    pub save_delay: Option<u64>,
    pub export_delay: Option<u64>,
}
