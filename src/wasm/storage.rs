use web_sys::{Document, Storage, Window};

use crate::state::{Theme, ThemeStore, THEME_KEY};

/// `localStorage` persistence plus the `data-theme` attribute on `<html>`.
pub struct LocalThemeStore {
    storage: Option<Storage>,
    document: Document,
}

impl LocalThemeStore {
    pub fn new(win: &Window, document: &Document) -> Self {
        let storage = win.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme will not persist");
        }
        Self {
            storage,
            document: document.clone(),
        }
    }

    pub fn applied(&self) -> Option<String> {
        self.document
            .document_element()
            .and_then(|root| root.get_attribute("data-theme"))
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(THEME_KEY, value) {
                log::warn!("could not persist theme: {err:?}");
            }
        }
    }

    fn apply(&mut self, theme: Theme) {
        if let Some(root) = self.document.document_element() {
            if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("could not apply theme: {err:?}");
            }
        }
    }
}
