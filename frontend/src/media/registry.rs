//! Page-wide "only one thing plays at a time" policy.
//!
//! Every player registers its element here on mount. Before any player
//! starts, it asks the registry to pause everyone else.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use web_sys::HtmlMediaElement;

/// Something on the page that can be playing and can be told to stop.
pub trait MediaHandle {
    fn is_playing(&self) -> bool;
    fn request_pause(&self);
}

impl MediaHandle for HtmlMediaElement {
    fn is_playing(&self) -> bool {
        !self.paused()
    }

    fn request_pause(&self) {
        if let Err(e) = HtmlMediaElement::pause(self) {
            log::warn!("Failed to pause media element: {:?}", e);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MediaId(u32);

struct Entry {
    id: MediaId,
    handle: Rc<dyn MediaHandle>,
}

#[derive(Default)]
struct Inner {
    next_id: Cell<u32>,
    entries: RefCell<Vec<Entry>>,
}

/// Shared through a `ContextProvider` at the app root.
#[derive(Clone, Default)]
pub struct MediaRegistry {
    inner: Rc<Inner>,
}

impl PartialEq for MediaRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for MediaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaRegistry")
            .field("registered", &self.len())
            .finish()
    }
}

impl MediaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_id(&self) -> MediaId {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        MediaId(id)
    }

    /// Adds `handle` under `id`. The returned guard removes it again when
    /// dropped, so unmounted players never get paused.
    pub fn register(&self, id: MediaId, handle: Rc<dyn MediaHandle>) -> Registration {
        let mut entries = self.inner.entries.borrow_mut();
        entries.retain(|entry| entry.id != id);
        entries.push(Entry { id, handle });
        Registration {
            registry: self.clone(),
            id,
        }
    }

    fn unregister(&self, id: MediaId) {
        self.inner.entries.borrow_mut().retain(|entry| entry.id != id);
    }

    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pauses every registered handle except `except` that is currently
    /// playing, and returns how many were paused.
    pub fn pause_others(&self, except: MediaId) -> usize {
        // Pausing can fire listeners that touch the registry; release the
        // borrow before calling out.
        let playing: Vec<Rc<dyn MediaHandle>> = self
            .inner
            .entries
            .borrow()
            .iter()
            .filter(|entry| entry.id != except && entry.handle.is_playing())
            .map(|entry| entry.handle.clone())
            .collect();

        for handle in playing.iter() {
            handle.request_pause();
        }
        if !playing.is_empty() {
            log::debug!("Paused {} other media element(s)", playing.len());
        }
        playing.len()
    }

    #[cfg(test)]
    pub fn any_playing(&self) -> bool {
        self.inner
            .entries
            .borrow()
            .iter()
            .any(|entry| entry.handle.is_playing())
    }
}

pub struct Registration {
    registry: MediaRegistry,
    id: MediaId,
}

impl Registration {
    #[cfg(test)]
    pub fn id(&self) -> MediaId {
        self.id
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.registry.unregister(self.id);
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    #[derive(Default)]
    pub struct FakeMedia {
        pub playing: Cell<bool>,
        pub pause_calls: Cell<u32>,
    }

    impl FakeMedia {
        pub fn playing() -> Rc<Self> {
            let media = Self::default();
            media.playing.set(true);
            Rc::new(media)
        }

        pub fn paused() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn play(&self) {
            self.playing.set(true);
        }
    }

    impl MediaHandle for FakeMedia {
        fn is_playing(&self) -> bool {
            self.playing.get()
        }

        fn request_pause(&self) {
            self.pause_calls.set(self.pause_calls.get() + 1);
            self.playing.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeMedia;
    use super::*;

    #[test]
    fn pauses_every_other_playing_element() {
        let registry = MediaRegistry::new();
        let a = FakeMedia::playing();
        let b = FakeMedia::playing();
        let target = FakeMedia::paused();

        let a_id = registry.allocate_id();
        let b_id = registry.allocate_id();
        let target_id = registry.allocate_id();
        let _a = registry.register(a_id, a.clone());
        let _b = registry.register(b_id, b.clone());
        let _t = registry.register(target_id, target.clone());

        assert_eq!(registry.pause_others(target_id), 2);
        target.play();

        assert!(!a.is_playing());
        assert!(!b.is_playing());
        assert!(target.is_playing());
    }

    #[test]
    fn does_not_touch_paused_elements_or_self() {
        let registry = MediaRegistry::new();
        let idle = FakeMedia::paused();
        let me = FakeMedia::playing();

        let idle_id = registry.allocate_id();
        let my_id = registry.allocate_id();
        let _idle = registry.register(idle_id, idle.clone());
        let _me = registry.register(my_id, me.clone());

        assert_eq!(registry.pause_others(my_id), 0);
        assert_eq!(idle.pause_calls.get(), 0);
        assert_eq!(me.pause_calls.get(), 0);
        assert!(me.is_playing());
    }

    #[test]
    fn empty_registry_is_a_no_op() {
        let registry = MediaRegistry::new();
        let id = registry.allocate_id();
        assert_eq!(registry.pause_others(id), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn dropping_registration_unregisters() {
        let registry = MediaRegistry::new();
        let media = FakeMedia::playing();
        let id = registry.allocate_id();
        let registration = registry.register(id, media.clone());
        assert_eq!(registration.id(), id);
        assert!(registry.any_playing());

        drop(registration);
        assert!(registry.is_empty());
        assert_eq!(registry.pause_others(registry.allocate_id()), 0);
        assert!(media.is_playing());
    }

    #[test]
    fn re_registering_replaces_the_handle() {
        let registry = MediaRegistry::new();
        let old = FakeMedia::playing();
        let new = FakeMedia::playing();
        let id = registry.allocate_id();

        let _first = registry.register(id, old.clone());
        let _second = registry.register(id, new.clone());
        assert_eq!(registry.len(), 1);

        registry.pause_others(registry.allocate_id());
        assert!(old.is_playing());
        assert!(!new.is_playing());
    }

    #[test]
    fn clones_share_state() {
        let registry = MediaRegistry::new();
        let other = registry.clone();
        assert_eq!(registry, other);
        assert_ne!(registry, MediaRegistry::new());

        let id = other.allocate_id();
        let _r = other.register(id, FakeMedia::paused());
        assert_eq!(registry.len(), 1);
    }
}
