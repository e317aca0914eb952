// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when neither the configuration nor the OS names an available one.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None)
    }
}

impl I18n {
    /// Loads every embedded `.ftl` table and picks the locale.
    ///
    /// Tables that fail to parse are skipped with a warning.
    pub fn new(preferred: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let res = match FluentResource::try_new(source) {
                Ok(res) => res,
                Err((_, errors)) => {
                    tracing::warn!(%locale, ?errors, "skipping unparsable translation file");
                    continue;
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Announcements are plain text; no bidi isolation marks.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(res) {
                tracing::warn!(%locale, ?errors, "translation file has duplicate messages");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(|locale| locale.to_string());

        let current_locale = resolve_locale(preferred, &available_locales)
            .or_else(|| DEFAULT_LOCALE.parse().ok())
            .unwrap_or_default();

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches language if a table exists for `locale`.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Formats a message with named arguments, e.g. `("label", "Home")`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    preferred: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check configuration
    if let Some(lang) = preferred.and_then(|s| match_available(s, available)) {
        return Some(lang);
    }

    // 2. Check OS locale
    if let Some(lang) = sys_locale::get_locale().and_then(|s| match_available(&s, available)) {
        return Some(lang);
    }

    // 3. Default locale, if embedded
    match_available(DEFAULT_LOCALE, available)
}

/// Matches exactly, then by language alone ("fr-CA" finds "fr").
fn match_available(tag: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let wanted = tag.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&wanted) {
        return Some(wanted);
    }
    available
        .iter()
        .find(|candidate| candidate.language == wanted.language)
        .cloned()
}
