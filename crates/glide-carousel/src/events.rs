#![forbid(unsafe_code)]

//! Slide notifications for external observers.
//!
//! Listeners are plain closures invoked synchronously, in registration
//! order, after the carousel's own reactions to the same event.

/// A carousel notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideEvent {
    /// A move was committed; fires before any rendering.
    BeforeSlide {
        /// Index being left.
        from: usize,
        /// Index being entered.
        to: usize,
    },
    /// The move finished (transition ended, or synchronously when not
    /// animated).
    AfterSlide {
        /// Index that was left.
        from: usize,
        /// Index that was entered.
        to: usize,
    },
    /// The carousel is being torn down.
    Destroy,
}

/// Handle returned by [`Listeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&SlideEvent)>;

/// Registered slide listeners.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    /// Create an empty listener list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&SlideEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Deliver `event` to every listener.
    pub fn emit(&mut self, event: &SlideEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every listener.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
