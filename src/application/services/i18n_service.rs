use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::application::ports::i18n_ports::{DocumentAttributesPort, KeyValueStorePort};
use crate::common::cache::{CacheKey, TranslationCache};
use crate::domain::entities::locale::{self, Locale, TextDirection};
use crate::domain::entities::params::TranslationParams;
use crate::domain::services::date_format::{DateFormatOptions, TimeFormatOptions};
use crate::domain::services::i18n_service::{I18nError, I18nResult, Translator};
use crate::domain::services::interpolation::interpolate;
use crate::domain::services::locale_formatter;
use crate::domain::services::number_format::NumberFormatOptions;
use crate::domain::services::plural_rules::{suffix, PluralCategory, PluralRuleSet};
use crate::domain::services::translation_store::{TranslationGap, TranslationStats, TranslationStore};

/// Slot of the key-value store holding the chosen locale
pub const LOCALE_STORAGE_KEY: &str = "feedfind-locale";

const DEFAULT_CACHE_ENTRIES: usize = 10_000;

type LocaleObserver = Arc<dyn Fn(Locale) + Send + Sync>;

#[derive(Default)]
struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(u64, LocaleObserver)>,
}

/// Active locale plus a counter bumped on every change, so a superseded
/// change can tell it lost the race
#[derive(Debug, Clone, Copy)]
struct LocaleState {
    locale: Locale,
    generation: u64,
}

fn lock_registry(registry: &Mutex<ObserverRegistry>) -> MutexGuard<'_, ObserverRegistry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Registration returned by [`I18nService::add_observer`].
///
/// The handle only holds a weak reference to the engine's registry. Calling
/// `unregister` more than once is harmless, and dropping the handle
/// unregisters as well; use `detach` to keep the observer for the lifetime of
/// the engine.
#[must_use = "dropping the handle unregisters the observer"]
pub struct ObserverHandle {
    registry: Weak<Mutex<ObserverRegistry>>,
    id: u64,
}

impl ObserverHandle {
    pub fn unregister(&self) {
        if let Some(registry) = self.registry.upgrade() {
            lock_registry(&registry).entries.retain(|(id, _)| *id != self.id);
        }
    }

    /// Keeps the observer registered until the engine itself is dropped
    pub fn detach(mut self) {
        self.registry = Weak::new();
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.unregister();
    }
}

/// Translation and formatting engine.
///
/// Holds the current locale, the translation tables, a cache of resolved
/// strings and the locale observers. Every translation and formatting call is
/// total: failures degrade to visible but harmless output.
pub struct I18nService {
    store: TranslationStore,
    plurals: PluralRuleSet,
    current: RwLock<LocaleState>,
    // Serializes document and preference writes of concurrent changes
    effects: Mutex<()>,
    cache: TranslationCache,
    observers: Arc<Mutex<ObserverRegistry>>,
    preferences: Option<Arc<dyn KeyValueStorePort>>,
    document: Option<Arc<dyn DocumentAttributesPort>>,
}

impl I18nService {
    /// Creates an engine whose initial locale comes from an environment hint
    /// (a language tag such as `es-MX`); unsupported or absent hints give the
    /// baseline locale
    pub fn new(store: TranslationStore, locale_hint: Option<&str>) -> Self {
        let initial = Locale::from_hint(locale_hint);
        tracing::info!("I18n engine starting with locale {} (hint: {:?})", initial, locale_hint);

        Self {
            store,
            plurals: PluralRuleSet::new(),
            current: RwLock::new(LocaleState {
                locale: initial,
                generation: 0,
            }),
            effects: Mutex::new(()),
            cache: TranslationCache::new(DEFAULT_CACHE_ENTRIES),
            observers: Arc::new(Mutex::new(ObserverRegistry::default())),
            preferences: None,
            document: None,
        }
    }

    pub fn with_cache_capacity(mut self, max_entries: usize) -> Self {
        self.cache = TranslationCache::new(max_entries);
        self
    }

    /// Key-value store used to persist the chosen locale
    pub fn with_preferences(mut self, preferences: Arc<dyn KeyValueStorePort>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Root rendering context receiving `lang`/`dir`; applied immediately so
    /// the shell starts consistent with the engine
    pub fn with_document(mut self, document: Arc<dyn DocumentAttributesPort>) -> Self {
        let current = self.get_locale();
        document.apply(current.as_str(), current.direction());
        self.document = Some(document);
        self
    }

    // ----- Locale state -----

    pub fn get_locale(&self) -> Locale {
        self.state().locale
    }

    fn state(&self) -> LocaleState {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs a side effect of the change numbered `generation`, unless a newer
    /// change has already happened. Effects of concurrent changes are applied
    /// one at a time, so the last change always writes last.
    fn apply_if_current(&self, generation: u64, effect: impl FnOnce()) {
        let _guard = self.effects.lock().unwrap_or_else(PoisonError::into_inner);
        if self.state().generation == generation {
            effect();
        }
    }

    /// Switches the active locale. Setting the current locale again does
    /// nothing at all; otherwise the cache is cleared, the document
    /// attributes are updated, observers run in registration order and the
    /// choice is persisted.
    ///
    /// When changes race, the document and the persisted value end up with
    /// whichever locale was set last; a superseded change skips its remaining
    /// effects.
    pub fn set_locale(&self, locale: Locale) {
        let generation = {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            if current.locale == locale {
                return;
            }
            tracing::info!("Locale changed from {} to {}", current.locale, locale);
            current.locale = locale;
            current.generation += 1;
            current.generation
        };

        self.cache.invalidate_all();

        if let Some(document) = &self.document {
            self.apply_if_current(generation, || document.apply(locale.as_str(), locale.direction()));
        }

        // Snapshot so observers can register, unregister or change the locale
        let observers: Vec<LocaleObserver> = lock_registry(&self.observers)
            .entries
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            // A newer change notifies everyone with its own locale
            if self.state().generation != generation {
                return;
            }
            observer(locale);
        }

        self.apply_if_current(generation, || self.persist_locale(locale));
    }

    /// String entry point for callers holding a raw tag; unsupported tags are
    /// rejected and the current locale is kept
    pub fn set_locale_tag(&self, tag: &str) -> I18nResult<Locale> {
        let locale = Locale::from_tag(tag).ok_or_else(|| I18nError::UnsupportedLocale(tag.to_string()))?;
        self.set_locale(locale);
        Ok(locale)
    }

    fn persist_locale(&self, locale: Locale) {
        let Some(preferences) = &self.preferences else {
            return;
        };
        if let Err(e) = preferences.set(LOCALE_STORAGE_KEY, locale.as_str()) {
            tracing::warn!("Could not persist locale {}: {}", locale, e);
        }
    }

    /// Restores the locale saved by a previous session. Returns the current
    /// locale unchanged when there is no store, no saved value, or the saved
    /// value is not a supported locale.
    pub fn load_persisted_locale(&self) -> Locale {
        let Some(preferences) = &self.preferences else {
            return self.get_locale();
        };

        let stored = match preferences.get(LOCALE_STORAGE_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Could not read persisted locale: {}", e);
                None
            }
        };

        match stored.as_deref().and_then(Locale::from_code) {
            Some(locale) => {
                self.set_locale(locale);
                locale
            }
            None => {
                if let Some(value) = stored {
                    tracing::debug!("Ignoring unsupported persisted locale {:?}", value);
                }
                self.get_locale()
            }
        }
    }

    /// Registers a callback invoked with the new locale after every change
    pub fn add_observer<F>(&self, observer: F) -> ObserverHandle
    where
        F: Fn(Locale) + Send + Sync + 'static,
    {
        let mut registry = lock_registry(&self.observers);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Arc::new(observer)));

        ObserverHandle {
            registry: Arc::downgrade(&self.observers),
            id,
        }
    }

    pub fn observer_count(&self) -> usize {
        lock_registry(&self.observers).entries.len()
    }

    // ----- Translation -----

    /// Translates `key` in the current locale
    pub fn t(&self, key: &str, params: Option<&TranslationParams>) -> String {
        self.t_in(self.get_locale(), key, params)
    }

    /// Translates `key` in an explicit locale. Lookup order: plural variant
    /// (when a count is given), the locale's template, the baseline
    /// template, and finally the key itself.
    pub fn t_in(&self, locale: Locale, key: &str, params: Option<&TranslationParams>) -> String {
        let empty = TranslationParams::default();
        let params = params.unwrap_or(&empty);

        let cache_key = params
            .cache_fragment()
            .map(|fragment| CacheKey::new(locale, key, fragment));
        if let Some(cached) = cache_key.as_ref().and_then(|k| self.cache.get(k)) {
            return cached;
        }

        let resolved = match params.count.and_then(|count| self.plural_template(locale, key, count)) {
            Some(template) => interpolate(template, params),
            None => interpolate(self.resolve_with_fallback(locale, key), params),
        };

        if let Some(cache_key) = cache_key {
            self.cache.insert(cache_key, resolved.clone());
        }
        resolved
    }

    /// `<key>_<category>` then `<key>_other`, in `locale` only
    fn plural_template(&self, locale: Locale, key: &str, count: f64) -> Option<&str> {
        let category = self.plurals.category(locale, count);
        let exact = format!("{}_{}", key, suffix(category));
        self.store.resolve(&exact, locale).or_else(|| {
            if category == PluralCategory::Other {
                return None;
            }
            let other = format!("{}_{}", key, suffix(PluralCategory::Other));
            self.store.resolve(&other, locale)
        })
    }

    fn resolve_with_fallback<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        if let Some(template) = self.store.resolve(key, locale) {
            return template;
        }
        if !locale.is_default() {
            if let Some(template) = self.store.resolve(key, Locale::DEFAULT) {
                return template;
            }
        }
        tracing::debug!("Missing translation for key {} in locale {}", key, locale);
        key
    }

    // ----- Formatting -----

    fn tag_or_current(&self, locale: Option<&str>) -> String {
        match locale {
            Some(tag) => tag.to_string(),
            None => self.get_locale().as_str().to_string(),
        }
    }

    pub fn format_date(&self, date: &NaiveDateTime, locale: Option<&str>, options: Option<DateFormatOptions>) -> String {
        locale_formatter::format_date(date, &self.tag_or_current(locale), &options.unwrap_or_default())
    }

    pub fn format_time(&self, date: &NaiveDateTime, locale: Option<&str>, options: Option<TimeFormatOptions>) -> String {
        locale_formatter::format_time(date, &self.tag_or_current(locale), &options.unwrap_or_default())
    }

    pub fn format_number(&self, value: f64, locale: Option<&str>, options: Option<NumberFormatOptions>) -> String {
        locale_formatter::format_number(value, &self.tag_or_current(locale), &options.unwrap_or_default())
    }

    /// Currency defaults to USD
    pub fn format_currency(&self, amount: f64, currency: Option<&str>, locale: Option<&str>) -> String {
        locale_formatter::format_currency(
            amount,
            currency.unwrap_or(locale_formatter::DEFAULT_CURRENCY),
            &self.tag_or_current(locale),
        )
    }

    pub fn format_distance(&self, meters: f64, locale: Option<&str>) -> String {
        locale_formatter::format_distance(meters, &self.tag_or_current(locale))
    }

    pub fn format_relative_time(&self, date: &DateTime<Utc>, locale: Option<&str>) -> String {
        self.format_relative_time_from(date, &Utc::now(), locale)
    }

    /// Relative phrasing against an explicit reference instant
    pub fn format_relative_time_from(&self, date: &DateTime<Utc>, now: &DateTime<Utc>, locale: Option<&str>) -> String {
        locale_formatter::format_relative_time(date, now, &self.tag_or_current(locale), &self.plurals)
    }

    pub fn is_rtl(&self, locale: &str) -> bool {
        locale::is_rtl(locale)
    }

    /// Direction of the current locale
    pub fn direction(&self) -> TextDirection {
        self.get_locale().direction()
    }

    // ----- Maintenance -----

    /// Locales with a loaded table
    pub fn available_locales(&self) -> Vec<Locale> {
        self.store.locales()
    }

    pub fn get_translation_keys(&self, locale: Locale) -> Vec<String> {
        self.store.keys(locale)
    }

    pub fn validate_translations(&self) -> Vec<TranslationGap> {
        self.store.validate()
    }

    pub fn get_translation_stats(&self) -> BTreeMap<Locale, TranslationStats> {
        self.store.stats()
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

impl Translator for I18nService {
    fn locale(&self) -> Locale {
        self.get_locale()
    }

    fn translate(&self, key: &str, params: Option<&TranslationParams>) -> String {
        self.t(key, params)
    }

    fn translate_in(&self, locale: Locale, key: &str, params: Option<&TranslationParams>) -> String {
        self.t_in(locale, key, params)
    }
}
