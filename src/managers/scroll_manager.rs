//! Scroll subscriptions.
//!
//! The host registers listeners once and calls [`ScrollManager::dispatch`]
//! for every scroll event it observes. Dispatch is synchronous: each listener
//! runs to completion, in registration order, once per event. Nothing is
//! queued or coalesced, and a subscription lasts as long as the manager.

use log::{debug, info};
use uuid::Uuid;

use crate::dom::{ContentElement, OutputTarget};
use crate::services::read_timer::{ReadTimer, ReadTimerTrait};
use crate::types::errors::ReadTimerError;
use crate::types::scroll::ScrollEvent;
use crate::types::settings::ReadTimerSettings;

/// Receives scroll events together with the document they occurred in.
pub trait ScrollListener<D: ?Sized> {
    fn handle_scroll(&mut self, document: &mut D, event: &ScrollEvent);
}

impl<D: ?Sized, L: ScrollListener<D> + ?Sized> ScrollListener<D> for Box<L> {
    fn handle_scroll(&mut self, document: &mut D, event: &ScrollEvent) {
        (**self).handle_scroll(document, event);
    }
}

/// Trait defining the scroll manager interface.
pub trait ScrollManagerTrait<D: ?Sized, L> {
    fn subscribe(&mut self, listener: L) -> String;
    fn dispatch(&mut self, document: &mut D, event: &ScrollEvent) -> usize;
    fn listener(&self, id: &str) -> Option<&L>;
    fn subscription_ids(&self) -> Vec<&str>;
    fn listener_count(&self) -> usize;
}

/// Ordered set of scroll subscriptions for one document.
pub struct ScrollManager<D: ?Sized, L = Box<dyn ScrollListener<D>>> {
    listeners: Vec<(String, L)>,
    dispatched: u64,
    _document: std::marker::PhantomData<fn(&mut D)>,
}

impl<D: ?Sized, L> ScrollManager<D, L> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            dispatched: 0,
            _document: std::marker::PhantomData,
        }
    }

    /// Number of events dispatched so far.
    pub fn dispatched_events(&self) -> u64 {
        self.dispatched
    }
}

impl<D: ?Sized, L> Default for ScrollManager<D, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized, L: ScrollListener<D>> ScrollManagerTrait<D, L> for ScrollManager<D, L> {
    /// Registers a listener and returns its subscription id.
    fn subscribe(&mut self, listener: L) -> String {
        let id = Uuid::new_v4().to_string();
        self.listeners.push((id.clone(), listener));
        id
    }

    /// Delivers `event` to every listener; returns how many were called.
    fn dispatch(&mut self, document: &mut D, event: &ScrollEvent) -> usize {
        self.dispatched += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener.handle_scroll(document, event);
        }
        debug!(
            "scroll event #{} delivered to {} listener(s)",
            self.dispatched,
            self.listeners.len()
        );
        self.listeners.len()
    }

    fn listener(&self, id: &str) -> Option<&L> {
        self.listeners
            .iter()
            .find(|(sub_id, _)| sub_id == id)
            .map(|(_, l)| l)
    }

    fn subscription_ids(&self) -> Vec<&str> {
        self.listeners.iter().map(|(id, _)| id.as_str()).collect()
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// A loaded read timer bound to the content element it measures.
#[derive(Debug, Clone)]
pub struct AttachedReadTimer<C> {
    timer: ReadTimer,
    content: C,
}

impl<C: ContentElement> AttachedReadTimer<C> {
    /// Loads a timer for `content`; fails without attaching on empty content.
    pub fn load<O>(
        mut content: C,
        settings: ReadTimerSettings,
        output: &mut O,
    ) -> Result<Self, ReadTimerError>
    where
        O: OutputTarget + ?Sized,
    {
        let timer = ReadTimer::load(settings, &mut content, output)?;
        Ok(Self { timer, content })
    }

    pub fn timer(&self) -> &ReadTimer {
        &self.timer
    }

    pub fn content(&self) -> &C {
        &self.content
    }
}

impl<C, D> ScrollListener<D> for AttachedReadTimer<C>
where
    C: ContentElement,
    D: OutputTarget + ?Sized,
{
    fn handle_scroll(&mut self, document: &mut D, event: &ScrollEvent) {
        self.timer.on_scroll(&mut self.content, document, event);
    }
}

/// Loads a read timer for `content` and subscribes it to scroll events.
///
/// On error nothing is subscribed.
pub fn attach<C, D>(
    content: C,
    settings: ReadTimerSettings,
    document: &mut D,
    manager: &mut ScrollManager<D, AttachedReadTimer<C>>,
) -> Result<String, ReadTimerError>
where
    C: ContentElement,
    D: OutputTarget + ?Sized,
{
    let attached = AttachedReadTimer::load(content, settings, document)?;
    let id = manager.subscribe(attached);
    info!("read timer {} attached", id);
    Ok(id)
}

/// Attaches one timer per content element, in order.
///
/// Stops at the first failure; timers attached before it stay subscribed.
pub fn attach_all<C, D, I>(
    contents: I,
    settings: &ReadTimerSettings,
    document: &mut D,
    manager: &mut ScrollManager<D, AttachedReadTimer<C>>,
) -> Result<Vec<String>, ReadTimerError>
where
    C: ContentElement,
    D: OutputTarget + ?Sized,
    I: IntoIterator<Item = C>,
{
    contents
        .into_iter()
        .map(|content| attach(content, settings.clone(), &mut *document, &mut *manager))
        .collect()
}
