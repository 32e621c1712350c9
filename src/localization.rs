use crate::errors::{CoreError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Locale loaded when none is configured.
pub const DEFAULT_LOCALE: &str = "de";

/// Display labels the decorator needs from a localization table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localizations {
    pub yes: String,
    pub no: String,
    /// Client-type code to label. JSON object keys are decimal strings.
    #[serde(default)]
    pub client_types: BTreeMap<u8, String>,
}

impl Localizations {
    pub fn from_json_str(name: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| CoreError::Localization(name.to_string(), err))
    }

    /// Label for a yes/no flag.
    pub fn boolean_label(&self, value: bool) -> &str {
        if value {
            &self.yes
        } else {
            &self.no
        }
    }

    pub fn client_type(&self, code: u8) -> Option<&str> {
        self.client_types.get(&code).map(String::as_str)
    }
}

/// Where localization tables come from.
///
/// Keeping this narrow lets callers swap the file-backed source for a fixed
/// table in tests.
pub trait LocalizationSource: Send + Sync {
    fn load(&self, locale: &str) -> Result<Localizations>;
}

/// Reads `<dir>/<locale>.json`.
#[derive(Debug, Clone)]
pub struct FileLocalizationSource {
    dir: PathBuf,
}

impl FileLocalizationSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.dir.join(format!("{locale}.json"))
    }
}

impl LocalizationSource for FileLocalizationSource {
    fn load(&self, locale: &str) -> Result<Localizations> {
        let path = self.path_for(locale);
        let content = fs::read_to_string(&path).map_err(|err| CoreError::io(&path, err))?;
        let table = Localizations::from_json_str(&path.display().to_string(), &content)?;
        debug!(
            "event=localizations_loaded module=localization status=ok locale={} client_types={}",
            locale,
            table.client_types.len()
        );
        Ok(table)
    }
}

/// In-memory source returning one fixed table for every locale.
#[derive(Debug, Clone)]
pub struct StaticLocalizationSource(pub Localizations);

impl LocalizationSource for StaticLocalizationSource {
    fn load(&self, _locale: &str) -> Result<Localizations> {
        Ok(self.0.clone())
    }
}
