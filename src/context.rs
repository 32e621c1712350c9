use crate::decorator::EntryDecorator;
use crate::errors::{CoreError, Result};
use crate::localization::{LocalizationSource, Localizations, DEFAULT_LOCALE};
use log::info;

/// Everything a view needs before it can render directory entries.
///
/// Built once by [`DisplayContextBuilder::build`] and passed explicitly to
/// whatever renders entries.
#[derive(Debug, Clone)]
pub struct DisplayContext {
    pub logged_in: bool,
    pub locale: String,
    pub localizations: Localizations,
}

impl DisplayContext {
    pub fn builder() -> DisplayContextBuilder {
        DisplayContextBuilder::default()
    }

    pub fn decorator(&self) -> EntryDecorator<'_> {
        EntryDecorator::new(&self.localizations)
    }
}

/// Collects startup results in any order. `build` only succeeds once the
/// session state and the localization table have both arrived.
#[derive(Debug, Clone, Default)]
pub struct DisplayContextBuilder {
    logged_in: Option<bool>,
    locale: Option<String>,
    localizations: Option<Localizations>,
}

impl DisplayContextBuilder {
    pub fn logged_in(mut self, logged_in: bool) -> Self {
        self.logged_in = Some(logged_in);
        self
    }

    pub fn localizations(mut self, locale: impl Into<String>, table: Localizations) -> Self {
        self.locale = Some(locale.into());
        self.localizations = Some(table);
        self
    }

    /// Loads the table for `locale` from `source`.
    pub fn load_localizations(
        self,
        source: &dyn LocalizationSource,
        locale: Option<&str>,
    ) -> Result<Self> {
        let locale = locale.unwrap_or(DEFAULT_LOCALE);
        let table = source.load(locale)?;
        Ok(self.localizations(locale, table))
    }

    pub fn is_ready(&self) -> bool {
        self.logged_in.is_some() && self.localizations.is_some()
    }

    pub fn build(self) -> Result<DisplayContext> {
        let logged_in = self
            .logged_in
            .ok_or_else(|| CoreError::missing("session state"))?;
        let localizations = self
            .localizations
            .ok_or_else(|| CoreError::missing("localizations"))?;
        let locale = self.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        info!(
            "event=display_context_ready module=context status=ok locale={} logged_in={}",
            locale, logged_in
        );
        Ok(DisplayContext {
            logged_in,
            locale,
            localizations,
        })
    }
}
