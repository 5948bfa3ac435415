//! Persistence of the Nucleus API token between sessions.

use dioxus::prelude::*;

/// Browser storage key holding the token.
pub const TOKEN_STORAGE_KEY: &str = "nucleusApiToken";

/// Key-value slot for the API token.
///
/// `load` returns an empty string when nothing has been stored.
pub trait TokenStore {
    fn load(&self) -> String;
    fn save(&self, token: &str);
}

/// In-memory store for controller tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    value: std::rc::Rc<std::cell::RefCell<Option<String>>>,
    writes: std::rc::Rc<std::cell::Cell<usize>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(token.into());
        store
    }

    /// Raw stored value; `None` until something is saved.
    pub fn stored(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> String {
        self.stored().unwrap_or_default()
    }

    fn save(&self, token: &str) {
        *self.value.borrow_mut() = Some(token.to_string());
        self.writes.set(self.writes.get() + 1);
    }
}

/// Store backed by `window.localStorage`.
///
/// Reads through `document::eval` are asynchronous, so the stored token is
/// fetched once by [`BrowserTokenStore::open`] and served from memory after.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserTokenStore {
    initial: String,
}

impl BrowserTokenStore {
    pub async fn open() -> Self {
        let initial = match document::eval(&get_item_script()).join::<String>().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = ?e, "Could not read stored API token");
                String::new()
            }
        };
        Self { initial }
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> String {
        self.initial.clone()
    }

    fn save(&self, token: &str) {
        document::eval(&set_item_script(token));
    }
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn get_item_script() -> String {
    format!(
        "return window.localStorage.getItem({}) || \"\";",
        js_string(TOKEN_STORAGE_KEY)
    )
}

fn set_item_script(token: &str) -> String {
    format!(
        "window.localStorage.setItem({}, {});",
        js_string(TOKEN_STORAGE_KEY),
        js_string(token)
    )
}
