use serde::{
    Deserialize,
    Serialize,
};

/// GUI preferences persisted to `settings.json` in the data folder. Loaded
/// with defaults when the file is missing or unreadable.
#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub zoom: f32,
}

impl Default for SettingsData {
    fn default() -> Self {
        SettingsData { dark_mode: true, zoom: 1.0 }
    }
}
