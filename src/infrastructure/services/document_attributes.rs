use std::sync::{PoisonError, RwLock};

use crate::application::ports::i18n_ports::DocumentAttributesPort;
use crate::domain::entities::locale::{Locale, TextDirection};

/// `lang` and `dir` of the page shell's root element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootAttributes {
    pub lang: String,
    pub dir: TextDirection,
}

/// Holds the attributes the web layer renders on `<html>`
#[derive(Debug)]
pub struct RootDocumentAttributes {
    current: RwLock<RootAttributes>,
}

impl RootDocumentAttributes {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(RootAttributes {
                lang: Locale::DEFAULT.as_str().to_string(),
                dir: Locale::DEFAULT.direction(),
            }),
        }
    }

    pub fn snapshot(&self) -> RootAttributes {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for RootDocumentAttributes {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAttributesPort for RootDocumentAttributes {
    fn apply(&self, lang: &str, dir: TextDirection) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        current.lang = lang.to_string();
        current.dir = dir;
        tracing::debug!("Document attributes set to lang={} dir={}", lang, dir);
    }
}
