//! Theme context definition.
//!
//! The preference lives under its own localStorage key, independent of the
//! session; logging out never touches it.

use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::StoreConfig;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the OS preference via `prefers-color-scheme`
    #[default]
    System,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        if self.resolved_dark() {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Whether this preference currently renders dark
    pub fn resolved_dark(&self) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => prefers_dark(),
        }
    }
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ThemeContext {
    pub theme: Theme,
}

pub enum ThemeAction {
    Set(Theme),
    Toggle,
}

impl Reducible for ThemeContext {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let theme = match action {
            ThemeAction::Set(theme) => theme,
            ThemeAction::Toggle => self.theme.toggle(),
        };

        let _ = LocalStorage::set(StoreConfig::THEME_KEY, theme);
        update_document_theme(theme);

        Rc::new(Self { theme })
    }
}

pub fn update_document_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(element) = document.document_element() {
                if let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>() {
                    let class_list = html_element.class_list();
                    if theme.resolved_dark() {
                        let _ = class_list.add_1("dark");
                    } else {
                        let _ = class_list.remove_1("dark");
                    }
                }
            }
        }
    }
}

pub type ThemeHandle = UseReducerHandle<ThemeContext>;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(ThemeContext::default);

    // Restore the stored preference on mount
    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let stored: Theme = LocalStorage::get(StoreConfig::THEME_KEY).unwrap_or_default();
            theme.dispatch(ThemeAction::Set(stored));
            || ()
        });
    }

    html! {
        <ContextProvider<ThemeHandle> context={theme}>
            {props.children.clone()}
        </ContextProvider<ThemeHandle>>
    }
}

/// Hook to use the theme context
#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
        .expect("ThemeHandle not found. Make sure to wrap your component with ThemeProvider")
}
