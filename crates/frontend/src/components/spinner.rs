//! Loading spinner component

use yew::prelude::*;

/// Visual footprint of the spinner
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum SpinnerSize {
    /// Inline, for form submit states
    Small,
    /// Block-level, for page placeholders
    #[default]
    Medium,
}

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
    #[prop_or_default]
    pub size: SpinnerSize,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    let (wrapper, ring) = match props.size {
        SpinnerSize::Small => ("text-center p-2", "w-5 h-5 border-2 mb-2"),
        SpinnerSize::Medium => ("text-center p-10", "w-10 h-10 border-4 mb-5"),
    };

    html! {
        <div class={wrapper}>
            <div class={classes!(ring, "border-gray-200", "dark:border-gray-700", "border-t-indigo-500", "dark:border-t-indigo-400", "rounded-full", "animate-spin", "mx-auto")}></div>
            if let Some(text) = &props.text {
                <p class="text-gray-600 dark:text-gray-400 text-sm m-0">{text}</p>
            }
        </div>
    }
}
