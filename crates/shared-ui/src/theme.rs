use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMoon, LdSun};
use dioxus_free_icons::Icon;

/// Colour scheme applied through the `data-theme` attribute on `<html>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored key, falling back to light.
    pub fn from_key(s: &str) -> Self {
        match s.trim() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Apply the persisted theme once on startup.
///
/// Call this once in the top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                document.documentElement.setAttribute('data-theme', match ? match[1] : 'light');
            })();
            "#,
        );
    });

    rsx! {}
}

/// Persist `mode` in a cookie and apply it to the document.
pub fn set_theme(mode: ThemeMode) {
    document::eval(&set_theme_script(mode));
}

fn set_theme_script(mode: ThemeMode) -> String {
    let theme = mode.as_str();
    format!(
        r#"
        document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
        document.documentElement.setAttribute('data-theme', '{theme}');
        "#,
    )
}

/// Light/dark switch button.
#[component]
pub fn ThemeToggle() -> Element {
    let mut mode = use_signal(ThemeMode::default);

    use_effect(move || {
        spawn(async move {
            let current = document::eval(
                "return document.documentElement.getAttribute('data-theme') || 'light';",
            )
            .join::<String>()
            .await;
            if let Ok(key) = current {
                mode.set(ThemeMode::from_key(&key));
            }
        });
    });

    let next = mode().toggled();
    let label = format!("Switch to {} theme", next.as_str());

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| {
                set_theme(next);
                mode.set(next);
            },
            if mode() == ThemeMode::Light {
                Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
            } else {
                Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
            }
        }
    }
}
