use leptos::prelude::*;

/// Headphones shown next to the "sound on" caption. The inverted variant is
/// drawn light for dark pages.
#[component]
pub fn AirpodsIcon(
    #[prop(optional)] inverted: bool,
    #[prop(optional, default = "w-full h-full".to_string())] classes: String,
) -> impl IntoView {
    let tone = if inverted { "text-white" } else { "text-black" };

    view! {
        <svg
            class=format!("{classes} {tone}")
            viewBox="0 0 48 48"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                d="M14 10a6 6 0 0 0-6 6v2a6 6 0 0 0 4 5.66V36a3 3 0 0 0 6 0V16a6 6 0 0 0-4-5.66V10Z"
                fill="currentColor"
            />
            <path
                d="M34 10a6 6 0 0 1 6 6v2a6 6 0 0 1-4 5.66V36a3 3 0 0 1-6 0V16a6 6 0 0 1 4-5.66V10Z"
                fill="currentColor"
            />
        </svg>
    }
}
