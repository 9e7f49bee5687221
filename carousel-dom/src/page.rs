use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use carousel::{CarouselOptions, Key};

use crate::dom::Element;
use crate::widget::{CarouselWidget, Control};

/// Handle to a carousel mounted on a [`Page`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetId(usize);

impl WidgetId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Listen {
    /// Window-level resize.
    Resize,
    /// Key-up scoped to the carousel root.
    KeyUp,
    /// Clicks on the prev/next controls.
    Click,
}

#[derive(Clone, Copy, Debug)]
struct Listener {
    widget: WidgetId,
    kind: Listen,
}

/// A headless page: host elements looked up by id, the mounted carousels, and the event
/// listeners that connect them to resize/key-up/click dispatch.
///
/// Listeners live as long as the page unless [`Page::dispose`] removes them.
#[derive(Clone, Debug)]
pub struct Page<T> {
    viewport_width: u32,
    hosts: BTreeMap<String, Element<T>>,
    widgets: Vec<(String, CarouselWidget<T>)>,
    listeners: Vec<Listener>,
}

impl<T> Page<T> {
    pub fn new(viewport_width: u32) -> Self {
        Self {
            viewport_width,
            hosts: BTreeMap::new(),
            widgets: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Registers a host element under `id` (without the leading `#`).
    ///
    /// Replaces any unmounted host with the same id.
    pub fn add_host(&mut self, id: &str, host: Element<T>) {
        self.hosts
            .insert(id.to_string(), host.with_attribute("id", id));
    }

    pub fn with_host(mut self, id: &str, host: Element<T>) -> Self {
        self.add_host(id, host);
        self
    }

    /// Mounts a carousel on the host registered as `id`.
    ///
    /// Registers a resize listener, a key-up listener and the control click listeners. Returns
    /// `None` when no unmounted host has that id.
    pub fn mount(&mut self, id: &str, options: CarouselOptions) -> Option<WidgetId> {
        let Some(host) = self.hosts.remove(id) else {
            cwarn!(id, "Page::mount: no such host");
            return None;
        };
        let widget = CarouselWidget::mount(host, options, self.viewport_width);
        let wid = WidgetId(self.widgets.len());
        self.widgets.push((id.to_string(), widget));
        for kind in [Listen::Resize, Listen::KeyUp, Listen::Click] {
            self.listeners.push(Listener { widget: wid, kind });
        }
        cdebug!(id, widget = wid.0, "Page::mount");
        Some(wid)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&CarouselWidget<T>> {
        self.widgets.get(id.0).map(|(_, w)| w)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut CarouselWidget<T>> {
        self.widgets.get_mut(id.0).map(|(_, w)| w)
    }

    /// Looks up a mounted carousel by its host id.
    pub fn find(&self, host_id: &str) -> Option<WidgetId> {
        self.widgets
            .iter()
            .position(|(id, _)| id == host_id)
            .map(WidgetId)
    }

    /// Host elements that have not been mounted yet.
    pub fn host(&self, id: &str) -> Option<&Element<T>> {
        self.hosts.get(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatches a window resize. Returns how many carousels changed layout.
    pub fn resize(&mut self, viewport_width: u32) -> usize {
        self.viewport_width = viewport_width;
        let targets = self.targets(Listen::Resize);
        let mut relaid = 0;
        for wid in targets {
            if let Some((_, w)) = self.widgets.get_mut(wid.0) {
                relaid += usize::from(w.on_resize(viewport_width));
            }
        }
        ctrace!(viewport_width, relaid, "Page::resize");
        relaid
    }

    /// Dispatches a key-up on a carousel root. Returns `true` when it moved.
    pub fn key_up(&mut self, id: WidgetId, key: &str) -> bool {
        if !self.is_listening(id, Listen::KeyUp) {
            return false;
        }
        self.widget_mut(id)
            .is_some_and(|w| w.on_key_up(Key::from_name(key)))
    }

    /// Dispatches a click on a navigation control. Returns `true` when it moved.
    pub fn click(&mut self, id: WidgetId, control: Control) -> bool {
        if !self.is_listening(id, Listen::Click) {
            return false;
        }
        self.widget_mut(id).is_some_and(|w| w.click(control))
    }

    /// Removes every listener of a carousel. Its DOM stays in place but no longer reacts to
    /// page events.
    ///
    /// Returns `false` if the carousel had nothing to remove (unknown or already disposed).
    pub fn dispose(&mut self, id: WidgetId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.widget != id);
        let removed = before - self.listeners.len();
        cdebug!(widget = id.0, removed, "Page::dispose");
        removed > 0
    }

    fn is_listening(&self, id: WidgetId, kind: Listen) -> bool {
        self.listeners
            .iter()
            .any(|l| l.widget == id && l.kind == kind)
    }

    fn targets(&self, kind: Listen) -> Vec<WidgetId> {
        self.listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.widget)
            .collect()
    }
}
