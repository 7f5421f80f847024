//! Discovery of the host page's video players and wiring of their observers.

use std::cell::RefCell;
use std::rc::Rc;

use consts::selectors::{FREEZE_FRAME_VIDEO, PLAYER_MEDIA, PLAYER_MUTE_CONTROL, VIDEO_PLAYER};
use consts::EXIT_RATIO;
use gloo::events::EventListener;
use state::playback::PlaybackCoordinator;
use utils::dom::{self, JsPlayerApi, VisibilityWatcher};
use utils::error::WidgetError;
use utils::media::MediaElement;
use utils::visibility::tracked_index;
use web_sys::Element;

/// Everything attached to the page for the lifetime of the widget. Dropping it
/// disconnects the observers and removes every mute-control listener.
pub struct PageBindings {
    _watchers: [VisibilityWatcher; 2],
    _mute_listeners: Vec<EventListener>,
}

fn track_player(
    coordinator: &Rc<PlaybackCoordinator>,
    element: &Element,
) -> Result<usize, WidgetError> {
    let api = JsPlayerApi::from_element(element)?;
    let media = dom::query_media(element, PLAYER_MEDIA)?;
    Ok(coordinator.register(Rc::new(api), Rc::new(media)))
}

fn watcher(
    threshold: f64,
    players: &Rc<RefCell<Vec<(Element, usize)>>>,
    coordinator: &Rc<PlaybackCoordinator>,
) -> Result<VisibilityWatcher, WidgetError> {
    let players = Rc::clone(players);
    let coordinator = Rc::clone(coordinator);
    VisibilityWatcher::new(threshold, move |target, ratio| {
        let idx = tracked_index(&players.borrow(), target);
        if let Some(idx) = idx {
            coordinator.on_visibility_change(idx, ratio);
        }
    })
}

/// Primes every player on the page and starts observing it. Nothing is
/// touched on the page unless both watchers could be created.
pub fn bind_page(coordinator: Rc<PlaybackCoordinator>) -> Result<PageBindings, WidgetError> {
    let players: Rc<RefCell<Vec<(Element, usize)>>> = Rc::default();
    let watchers = [
        watcher(coordinator.config().entry_ratio, &players, &coordinator)?,
        watcher(EXIT_RATIO, &players, &coordinator)?,
    ];
    let elements = dom::query_all(VIDEO_PLAYER)?;

    let mut mute_listeners = Vec::new();
    for element in elements {
        let idx = match track_player(&coordinator, &element) {
            Ok(idx) => idx,
            Err(e) => {
                log::warn!("skipping video player: {e}");
                continue;
            }
        };

        if let Ok(Some(control)) = element.query_selector(PLAYER_MUTE_CONTROL) {
            let coordinator = Rc::clone(&coordinator);
            mute_listeners.push(dom::on_click(&control, move || {
                coordinator.toggle_mute();
            }));
        }

        for watcher in &watchers {
            watcher.observe(&element);
        }
        players.borrow_mut().push((element, idx));
    }

    coordinator.schedule_freeze_frame_discovery(|| match dom::query_all_media(FREEZE_FRAME_VIDEO) {
        Ok(found) => found
            .into_iter()
            .map(|media| Rc::new(media) as Rc<dyn MediaElement>)
            .collect(),
        Err(e) => {
            log::warn!("freeze-frame lookup failed: {e}");
            Vec::new()
        }
    });

    log::info!("tracking {} video players", players.borrow().len());

    Ok(PageBindings {
        _watchers: watchers,
        _mute_listeners: mute_listeners,
    })
}
