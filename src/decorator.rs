//! Human-readable rendering of raw directory entry fields.

use crate::entry::DirectoryEntry;
use crate::extension::decode_extension;
use crate::localization::Localizations;
use crate::timestamp::{decode_timestamp, format_timestamp};
use chrono::{Local, TimeZone};
use log::warn;
use std::fmt::{self, Display};

/// Flag bit marking a soft-deleted entry.
pub const FLAG_DISABLED: u16 = 0x02;

/// Returns true iff the disabled bit is set. Other bits are ignored.
pub fn disabled(flags: u16) -> bool {
    flags & FLAG_DISABLED != 0
}

/// Sets or clears only the disabled bit.
pub fn with_disabled(flags: u16, value: bool) -> u16 {
    if value {
        flags | FLAG_DISABLED
    } else {
        flags & !FLAG_DISABLED
    }
}

/// Looks up the label for a client type. Unknown codes yield `None`.
pub fn display_client_type(code: u8, table: &Localizations) -> Option<&str> {
    table.client_type(code)
}

/// Columns of the entry tables.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum EntryField {
    Number,
    Name,
    Extension,
    Disabled,
    ClientType,
    Timestamp,
    Hostname,
    IpAddress,
    Port,
    Pin,
}

impl EntryField {
    pub const ALL: [EntryField; 10] = [
        Self::Number,
        Self::Name,
        Self::Extension,
        Self::Disabled,
        Self::ClientType,
        Self::Timestamp,
        Self::Hostname,
        Self::IpAddress,
        Self::Port,
        Self::Pin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Name => "name",
            Self::Extension => "extension",
            Self::Disabled => "disabled",
            Self::ClientType => "client_type",
            Self::Timestamp => "timestamp",
            Self::Hostname => "hostname",
            Self::IpAddress => "ipaddress",
            Self::Port => "port",
            Self::Pin => "pin",
        }
    }
}

impl Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders entry fields using an explicitly supplied localization table and
/// display time zone.
#[derive(Debug, Clone)]
pub struct EntryDecorator<'a, Tz: TimeZone = Local> {
    localizations: &'a Localizations,
    zone: Tz,
}

impl<'a> EntryDecorator<'a, Local> {
    pub fn new(localizations: &'a Localizations) -> Self {
        Self {
            localizations,
            zone: Local,
        }
    }
}

impl<'a, Tz> EntryDecorator<'a, Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn with_zone<Z: TimeZone>(self, zone: Z) -> EntryDecorator<'a, Z> {
        EntryDecorator {
            localizations: self.localizations,
            zone,
        }
    }

    /// Display value for one column, or `None` when there is nothing to show.
    pub fn format_field(&self, entry: &DirectoryEntry, field: EntryField) -> Option<String> {
        match field {
            EntryField::Number => Some(entry.number.to_string()),
            EntryField::Name => Some(entry.name.clone()),
            EntryField::Extension => Some(decode_extension(entry.extension)),
            EntryField::Disabled => Some(
                self.localizations
                    .boolean_label(entry.is_disabled())
                    .to_string(),
            ),
            EntryField::ClientType => {
                display_client_type(entry.client_type, self.localizations).map(str::to_string)
            }
            EntryField::Timestamp => self.format_time(entry),
            EntryField::Hostname => entry.hostname.clone(),
            EntryField::IpAddress => entry.ipaddress.clone(),
            EntryField::Port => entry.port.map(|port| port.to_string()),
            EntryField::Pin => entry.pin.map(|pin| pin.to_string()),
        }
    }

    fn format_time(&self, entry: &DirectoryEntry) -> Option<String> {
        match decode_timestamp(entry.timestamp) {
            Ok(time) => Some(format_timestamp(&time, &self.zone)),
            Err(err) => {
                warn!(
                    "event=timestamp_decode module=decorator status=invalid number={} error={}",
                    entry.number, err
                );
                None
            }
        }
    }

    pub fn decorate(&self, entry: &DirectoryEntry) -> DecoratedEntry {
        let text = |field| self.format_field(entry, field).unwrap_or_default();
        DecoratedEntry {
            number: text(EntryField::Number),
            name: text(EntryField::Name),
            extension: text(EntryField::Extension),
            disabled: text(EntryField::Disabled),
            client_type: self.format_field(entry, EntryField::ClientType),
            timestamp: self.format_field(entry, EntryField::Timestamp),
        }
    }
}

/// Display-ready row for an entry listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedEntry {
    pub number: String,
    pub name: String,
    pub extension: String,
    pub disabled: String,
    pub client_type: Option<String>,
    pub timestamp: Option<String>,
}

impl Display for DecoratedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>2} {} | {} | {} | {}",
            self.number,
            self.extension,
            self.name,
            self.client_type.as_deref().unwrap_or("?"),
            self.disabled,
            self.timestamp.as_deref().unwrap_or("-"),
        )
    }
}
