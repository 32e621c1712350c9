//! Decoding of ITELEX directory values for humans.
//! The extension codec is the core; the rest turns raw entry fields
//! (flags, timestamps, client types) into display text.

pub mod context;
pub mod decorator;
pub mod entry;
pub mod errors;
pub mod extension;
pub mod localization;
pub mod timestamp;

pub use context::{DisplayContext, DisplayContextBuilder};
pub use decorator::{
    disabled,
    display_client_type,
    with_disabled,
    DecoratedEntry,
    EntryDecorator,
    EntryField,
    FLAG_DISABLED,
};
pub use entry::DirectoryEntry;
pub use errors::{CoreError, ExtensionParseError, Result};
pub use extension::{
    decode_extension,
    encode_extension,
    ExtensionCode,
    MAX_EXTENSION_CODE,
    NO_EXTENSION,
};
pub use localization::{
    FileLocalizationSource,
    LocalizationSource,
    Localizations,
    StaticLocalizationSource,
    DEFAULT_LOCALE,
};
pub use timestamp::{
    current_itelex_timestamp,
    decode_timestamp,
    encode_timestamp,
    format_timestamp,
    DISPLAY_TIME_FORMAT,
    ITELEX_EPOCH_OFFSET_SECS,
};

/// Re-export the whole API surface for binaries.
pub mod prelude {
    pub use crate::{
        context::*,
        decorator::*,
        entry::*,
        errors::{CoreError, ExtensionParseError, Result},
        extension::*,
        localization::*,
        timestamp::*,
    };
}
