use std::cell::RefCell;
use std::rc::Rc;

use component::audio_toggle::AudioToggle;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use state::{audio_state::AudioState, playback::PlaybackCoordinator};
use utils::{config::WidgetConfig, dom, scheduler::WebScheduler};

use crate::page::{bind_page, PageBindings};

#[component]
pub fn App(#[prop(optional)] config: WidgetConfig) -> impl IntoView {
    let audio = AudioState::register_global(dom::is_dark_mode());
    let coordinator = SendWrapper::new(Rc::new(PlaybackCoordinator::new(
        config,
        audio,
        Rc::new(WebScheduler),
    )));
    let bindings = SendWrapper::new(Rc::new(RefCell::new(None::<PageBindings>)));

    // players are looked up once the widget itself is in the document
    let (bind_coordinator, bind_slot) = (coordinator.clone(), bindings.clone());
    Effect::new(move |_| {
        if bind_slot.borrow().is_some() {
            return;
        }
        match bind_page(Rc::clone(&bind_coordinator)) {
            Ok(page) => *bind_slot.borrow_mut() = Some(page),
            Err(e) => log::warn!("failed to bind video players: {e}"),
        }
    });

    let toggle_coordinator = coordinator.clone();
    let on_toggle = Callback::new(move |_| {
        toggle_coordinator.toggle_mute();
    });

    on_cleanup(move || {
        // observers and listeners go first so nothing re-arms a timer
        bindings.borrow_mut().take();
        coordinator.unmount();
    });

    view! { <AudioToggle on_toggle /> }
}
