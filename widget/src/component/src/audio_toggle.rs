use consts::captions::{ENABLE_AUDIO, MUTE_AUDIO, WHILE_MUTED, WHILE_UNMUTED};
use consts::element_ids::{FLOATING_TOGGLE, INLINE_TOGGLE};
use consts::EXIT_RATIO;
use leptos::html::Button;
use leptos::portal::Portal;
use leptos::prelude::*;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use state::audio_state::AudioState;
use utils::visibility::floating_toggle_visible;

use crate::icons::airpods_icon::AirpodsIcon;
use crate::icons::sound_off_icon::SoundOffIcon;
use crate::icons::sound_on_icon::SoundOnIcon;

/// Which icon the floating toggle shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatingIcon {
    SoundOff,
    SoundOn,
}

pub fn caption(muted: bool) -> &'static str {
    if muted {
        WHILE_MUTED
    } else {
        WHILE_UNMUTED
    }
}

pub fn button_label(muted: bool) -> &'static str {
    if muted {
        ENABLE_AUDIO
    } else {
        MUTE_AUDIO
    }
}

/// Headphones are only shown as a hint while the story is muted
pub fn shows_headphones(muted: bool) -> bool {
    muted
}

pub fn floating_icon(muted: bool) -> FloatingIcon {
    if muted {
        FloatingIcon::SoundOff
    } else {
        FloatingIcon::SoundOn
    }
}

/// Inline control placed in the story: headphones, a caption and the toggle button.
#[component]
pub fn InlineAudioToggle(
    #[prop(optional)] node_ref: NodeRef<Button>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let AudioState {
        muted, dark_mode, ..
    } = AudioState::get();

    view! {
        <div class="flex flex-col items-center gap-4 py-8 text-center">
            <div class="size-16" class:hidden=move || !shows_headphones(muted.get())>
                <AirpodsIcon inverted=dark_mode />
            </div>

            <div class="text-sm font-semibold tracking-wide">
                {move || caption(muted.get())}
            </div>

            <button
                id=INLINE_TOGGLE
                node_ref=node_ref
                class="px-5 py-2 border rounded-full text-xs font-bold tracking-widest cursor-pointer"
                on:click=move |_| on_toggle.run(())
            >
                {move || button_label(muted.get())}
            </button>
        </div>
    }
}

/// Toggle pinned to the viewport, portalled into the body so page layout can't clip it.
#[component]
pub fn FloatingAudioToggle(on_toggle: Callback<()>) -> impl IntoView {
    let AudioState {
        muted,
        show_floating,
        ..
    } = AudioState::get();

    view! {
        <Portal>
            <button
                id=FLOATING_TOGGLE
                class="fixed bottom-6 right-6 z-50 p-3 rounded-full bg-black/60 text-white cursor-pointer"
                class:hidden=move || !show_floating.get()
                on:click=move |_| on_toggle.run(())
            >
                <Show
                    when=move || floating_icon(muted.get()) == FloatingIcon::SoundOff
                    fallback=|| view! { <SoundOnIcon classes="w-6 h-6".to_string() /> }
                >
                    <SoundOffIcon classes="w-6 h-6".to_string() />
                </Show>
            </button>
        </Portal>
    }
}

/// Both toggles, with the floating one shown only while the inline one is off screen.
#[component]
pub fn AudioToggle(on_toggle: Callback<()>) -> impl IntoView {
    let AudioState { show_floating, .. } = AudioState::get();
    let inline_ref = NodeRef::<Button>::new();

    use_intersection_observer_with_options(
        inline_ref,
        move |entries, _| {
            for entry in entries {
                show_floating.set(floating_toggle_visible(entry.intersection_ratio()));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![EXIT_RATIO]),
    );

    view! {
        <div class="relative w-full">
            <InlineAudioToggle node_ref=inline_ref on_toggle />
            <FloatingAudioToggle on_toggle />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use leptos::reactive::owner::Owner;
    use state::media_registry::MediaRegistry;
    use state::mute_controller::MuteController;

    use super::*;

    #[test]
    fn muted_surface() {
        assert_eq!(caption(true), WHILE_MUTED);
        assert_eq!(button_label(true), ENABLE_AUDIO);
        assert!(shows_headphones(true));
        assert_eq!(floating_icon(true), FloatingIcon::SoundOff);
    }

    #[test]
    fn unmuted_surface() {
        assert_eq!(caption(false), WHILE_UNMUTED);
        assert_eq!(button_label(false), MUTE_AUDIO);
        assert!(!shows_headphones(false));
        assert_eq!(floating_icon(false), FloatingIcon::SoundOn);
    }

    #[test]
    fn toggle_switches_caption_and_floating_icon() {
        let owner = Owner::new();
        owner.set();

        let audio = AudioState::new(false);
        let controller = MuteController::new(audio, Rc::new(MediaRegistry::default()));
        assert_eq!(caption(audio.muted.get_untracked()), WHILE_MUTED);
        assert_eq!(
            floating_icon(audio.muted.get_untracked()),
            FloatingIcon::SoundOff
        );

        controller.toggle();
        assert_eq!(caption(audio.muted.get_untracked()), WHILE_UNMUTED);
        assert_eq!(button_label(audio.muted.get_untracked()), MUTE_AUDIO);
        assert_eq!(
            floating_icon(audio.muted.get_untracked()),
            FloatingIcon::SoundOn
        );

        controller.toggle();
        assert_eq!(caption(audio.muted.get_untracked()), WHILE_MUTED);
        assert_eq!(
            floating_icon(audio.muted.get_untracked()),
            FloatingIcon::SoundOff
        );
    }
}
