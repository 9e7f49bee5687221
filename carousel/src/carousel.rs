use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{CarouselOptions, Key, Layout, Mode, MoveCallback, NavState, Transform};

/// A headless carousel: paging state, layout math and move notifications.
///
/// This type holds no UI objects. The adapter reports the slide count once, then forwards
/// viewport resizes and key-ups, and reads back [`Layout`], [`Transform`] and [`NavState`] to
/// style its own elements.
///
/// Invalid navigation requests are ignored: the index, transform and nav state stay as they
/// were and no observer fires.
#[derive(Clone)]
pub struct Carousel {
    options: CarouselOptions,
    count: usize,
    current_index: usize,
    mode: Mode,
    layout: Layout,
    transform: Transform,
    nav: NavState,
    move_callbacks: Vec<MoveCallback>,
}

impl Carousel {
    /// Creates a carousel over `count` slides.
    ///
    /// The carousel starts in mobile mode at index 0 and fires one move notification, then
    /// checks `viewport_width` exactly like a resize event would. On a desktop-sized viewport
    /// that second check flips the mode, relays out and notifies again.
    pub fn new(count: usize, options: CarouselOptions, viewport_width: u32) -> Self {
        cdebug!(
            count,
            slides_to_scroll = options.slides_to_scroll,
            slides_visible = options.slides_visible,
            looping = options.looping,
            viewport_width,
            "Carousel::new"
        );
        if let Err(_err) = options.validate() {
            cwarn!(error = %_err, "Carousel::new: layout math is undefined for these options");
        }

        let mut c = Self {
            options,
            count,
            current_index: 0,
            mode: Mode::Mobile,
            layout: Layout::default(),
            transform: Transform::default(),
            nav: NavState::default(),
            move_callbacks: Vec::new(),
        };
        c.apply_layout();
        c.notify();
        c.on_resize(viewport_width);
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_mobile(&self) -> bool {
        self.mode.is_mobile()
    }

    /// Effective step: 1 in mobile mode, the configured value otherwise.
    pub fn slides_to_scroll(&self) -> usize {
        match self.mode {
            Mode::Mobile => 1,
            Mode::Desktop => self.options.slides_to_scroll,
        }
    }

    /// Effective page size: 1 in mobile mode, the configured value otherwise.
    pub fn slides_visible(&self) -> usize {
        match self.mode {
            Mode::Mobile => 1,
            Mode::Desktop => self.options.slides_visible,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    /// Indexes of the slides covering the viewport at the current position.
    pub fn visible_range(&self) -> Range<usize> {
        let end = self
            .current_index
            .saturating_add(self.slides_visible())
            .min(self.count);
        self.current_index.min(end)..end
    }

    /// Registers a move observer. Observers run in registration order and cannot be removed.
    pub fn on_move(&mut self, f: impl Fn(usize) + Send + Sync + 'static) {
        self.move_callbacks.push(Arc::new(f));
    }

    pub fn next(&mut self) -> bool {
        let target = self.current_index as isize + self.slides_to_scroll() as isize;
        self.go_to_item(target)
    }

    pub fn prev(&mut self) -> bool {
        let target = self.current_index as isize - self.slides_to_scroll() as isize;
        self.go_to_item(target)
    }

    /// Moves to `index`, wrapping at the ends when looping.
    ///
    /// The end-of-track checks use the configured `slides_visible`, not the mobile override, so
    /// in mobile mode the last `slides_visible - 1` slides are only reachable by wrapping.
    ///
    /// Returns `true` when the move was accepted (observers fired), `false` for a no-op.
    pub fn go_to_item(&mut self, index: isize) -> bool {
        let Some(target) = self.resolve_target(index) else {
            ctrace!(
                index,
                current = self.current_index,
                "go_to_item: ignored"
            );
            return false;
        };

        self.transform = Transform::for_index(target, self.count);
        self.current_index = target;
        ctrace!(
            index = target,
            translate_x = self.transform.translate_x,
            "go_to_item"
        );
        self.notify();
        true
    }

    fn resolve_target(&self, index: isize) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let visible = self.options.slides_visible;
        let looping = self.options.looping;

        if index < 0 {
            if !looping {
                return None;
            }
            let wrapped = self.count as isize - visible as isize;
            return usize::try_from(wrapped).ok();
        }

        let index = index as usize;
        let page_incomplete = self.current_index.saturating_add(visible) >= self.count;
        if index >= self.count || (page_incomplete && index > self.current_index) {
            return looping.then_some(0);
        }
        Some(index)
    }

    /// Re-evaluates the breakpoint for a new viewport width.
    ///
    /// Only a mobile/desktop flip has any effect: the layout is recomputed and every observer
    /// is re-fired with the current index, which is kept as-is even if it no longer starts a
    /// page. Returns `true` when the mode changed.
    pub fn on_resize(&mut self, viewport_width: u32) -> bool {
        let mode = Mode::for_viewport_width(viewport_width);
        if mode == self.mode {
            return false;
        }
        cdebug!(?mode, viewport_width, index = self.current_index, "on_resize: mode changed");
        self.mode = mode;
        self.apply_layout();
        self.notify();
        true
    }

    /// Arrow-right goes forward, arrow-left goes back; other keys are ignored.
    ///
    /// Returns `true` when a move was accepted.
    pub fn on_key_up(&mut self, key: Key) -> bool {
        match key {
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.prev(),
            Key::Other => false,
        }
    }

    fn apply_layout(&mut self) {
        self.layout = Layout::compute(self.count, self.slides_visible());
        ctrace!(
            container_width = self.layout.container_width,
            slide_width = self.layout.slide_width,
            "apply_layout"
        );
    }

    fn notify(&mut self) {
        let index = self.current_index;
        self.update_nav(index);
        for cb in &self.move_callbacks {
            cb(index);
        }
    }

    // Built-in observer; always runs before the registered ones.
    fn update_nav(&mut self, index: usize) {
        if self.options.looping {
            return;
        }
        self.nav.prev_hidden = index == 0;
        self.nav.next_hidden =
            self.current_index.saturating_add(self.slides_visible()) >= self.count;
    }
}

impl core::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("options", &self.options)
            .field("count", &self.count)
            .field("current_index", &self.current_index)
            .field("mode", &self.mode)
            .field("layout", &self.layout)
            .field("transform", &self.transform)
            .field("nav", &self.nav)
            .field("move_callbacks", &self.move_callbacks.len())
            .finish()
    }
}
