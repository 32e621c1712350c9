use crate::decorator::{disabled, with_disabled};
use crate::errors::Result;
use crate::extension::ExtensionCode;
use serde::{Deserialize, Serialize};

/// Directory entry as delivered by the directory API.
///
/// Raw wire values are kept as-is; decoding for display happens in
/// [`crate::decorator`]. Unknown JSON fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub number: u32,
    #[serde(default)]
    pub name: String,
    /// Raw extension code; may be out of range when the backend misbehaves.
    #[serde(default)]
    pub extension: i64,
    /// Bitmask; see [`crate::decorator::FLAG_DISABLED`].
    #[serde(default)]
    pub flags: u16,
    /// Seconds since the directory epoch.
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub client_type: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipaddress: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<u16>,
}

impl DirectoryEntry {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            extension: 0,
            flags: 0,
            timestamp: 0,
            client_type: 0,
            hostname: None,
            ipaddress: None,
            port: None,
            pin: None,
        }
    }

    /// Whether the entry is soft-deleted.
    pub fn is_disabled(&self) -> bool {
        disabled(self.flags)
    }

    pub fn set_disabled(&mut self, value: bool) {
        self.flags = with_disabled(self.flags, value);
    }

    /// The stored extension, or `None` if it is outside the valid range.
    pub fn extension_code(&self) -> Option<ExtensionCode> {
        ExtensionCode::try_from(self.extension).ok()
    }

    /// Applies a form-typed extension before submitting an update.
    ///
    /// Unlike the display path this is strict: malformed input and codes
    /// outside `0..=110` are rejected and the entry is left unchanged.
    pub fn apply_extension_input(&mut self, input: &str) -> Result<()> {
        let code: ExtensionCode = input.parse()?;
        self.extension = i64::from(code);
        Ok(())
    }
}
