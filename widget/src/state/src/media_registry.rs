use std::cell::RefCell;
use std::rc::Rc;

use utils::media::{MediaElement, VideoHandle};

/// Everything the widget currently tracks on the page.
#[derive(Default)]
pub struct MediaRegistry {
    players: RefCell<Vec<Rc<VideoHandle>>>,
    /// `None` until freeze frame discovery has run
    freeze_frames: RefCell<Option<Vec<Rc<dyn MediaElement>>>>,
}

impl MediaRegistry {
    pub fn push_player(&self, handle: Rc<VideoHandle>) -> usize {
        let mut players = self.players.borrow_mut();
        players.push(handle);
        players.len() - 1
    }

    pub fn player(&self, idx: usize) -> Option<Rc<VideoHandle>> {
        self.players.borrow().get(idx).cloned()
    }

    // handed out as a snapshot so callers can reach back into the registry
    pub fn players(&self) -> Vec<Rc<VideoHandle>> {
        self.players.borrow().clone()
    }

    pub fn player_count(&self) -> usize {
        self.players.borrow().len()
    }

    pub fn set_freeze_frames(&self, frames: Vec<Rc<dyn MediaElement>>) {
        *self.freeze_frames.borrow_mut() = Some(frames);
    }

    pub fn freeze_frames(&self) -> Option<Vec<Rc<dyn MediaElement>>> {
        self.freeze_frames.borrow().clone()
    }

    /// Forgets every tracked element, returning the players that were tracked
    pub fn clear(&self) -> Vec<Rc<VideoHandle>> {
        self.freeze_frames.borrow_mut().take();
        std::mem::take(&mut *self.players.borrow_mut())
    }
}
