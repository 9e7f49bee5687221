use alloc::vec::Vec;

use carousel::{Carousel, CarouselOptions, Key};

use crate::dom::{Element, Node};

/// Class names shared with the stylesheet. The `--hiden` spelling is part of that contract.
pub mod class {
    pub const ROOT: &str = "carrousel";
    pub const CONTAINER: &str = "carrousel__container";
    pub const ITEM: &str = "carrousel__item";
    pub const NEXT: &str = "carrousel__next";
    pub const PREV: &str = "carrousel__prev";
    pub const NEXT_HIDDEN: &str = "carrousel__next--hiden";
    pub const PREV_HIDDEN: &str = "carrousel__prev--hiden";
}

/// One of the two navigation controls appended to the carousel root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Control {
    Prev,
    Next,
}

// Fixed positions inside the root element, in append order.
const CONTAINER_AT: usize = 0;
const NEXT_AT: usize = 1;
const PREV_AT: usize = 2;

/// A carousel mounted on a host element.
///
/// Owns the host subtree and a [`Carousel`]. Every operation forwards to the carousel and then
/// mirrors its layout, transform and nav state into inline styles and classes:
///
/// ```text
/// host
/// └── div.carrousel[tabindex=0]
///     ├── div.carrousel__container   (width, transform)
///     │   └── div.carrousel__item    (width), one per original child
///     ├── div.carrousel__next
///     └── div.carrousel__prev
/// ```
#[derive(Clone, Debug)]
pub struct CarouselWidget<T> {
    host: Element<T>,
    root_at: usize,
    carousel: Carousel,
}

impl<T> CarouselWidget<T> {
    /// Moves the host's children into slide wrappers and builds the carousel around them.
    ///
    /// Children keep their order and are moved, not cloned.
    pub fn mount(mut host: Element<T>, options: CarouselOptions, viewport_width: u32) -> Self {
        let children = host.take_children();
        let count = children.len();

        let mut container = Element::div_with_class(class::CONTAINER);
        for child in children {
            let mut item = Element::div_with_class(class::ITEM);
            item.append_child(child);
            container.append_child(item);
        }

        let mut root = Element::div_with_class(class::ROOT);
        root.set_attribute("tabindex", "0");
        root.append_child(container);
        root.append_child(Element::div_with_class(class::NEXT));
        root.append_child(Element::div_with_class(class::PREV));

        host.append_child(root);
        let root_at = host.children().len() - 1;

        let carousel = Carousel::new(count, options, viewport_width);
        ctrace!(count, root_at, "CarouselWidget::mount");

        let mut w = Self {
            host,
            root_at,
            carousel,
        };
        w.sync_layout();
        w.sync_nav();
        w
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn host(&self) -> &Element<T> {
        &self.host
    }

    pub fn into_host(self) -> Element<T> {
        self.host
    }

    pub fn root(&self) -> &Element<T> {
        self.host.children()[self.root_at]
            .as_element()
            .unwrap_or_else(|| unreachable!("carousel root replaced by content"))
    }

    pub fn container(&self) -> &Element<T> {
        self.root_child(CONTAINER_AT)
    }

    pub fn control(&self, control: Control) -> &Element<T> {
        match control {
            Control::Next => self.root_child(NEXT_AT),
            Control::Prev => self.root_child(PREV_AT),
        }
    }

    /// Slide wrappers, in original child order.
    pub fn slides(&self) -> impl Iterator<Item = &Element<T>> {
        self.container().child_elements()
    }

    /// The original content of slide `index`.
    pub fn slide_content(&self, index: usize) -> Option<&T> {
        self.slides()
            .nth(index)?
            .children()
            .iter()
            .find_map(Node::as_content)
    }

    /// Content currently covering the viewport.
    pub fn visible_content(&self) -> Vec<&T> {
        self.carousel
            .visible_range()
            .filter_map(|i| self.slide_content(i))
            .collect()
    }

    pub fn on_move(&mut self, f: impl Fn(usize) + Send + Sync + 'static) {
        self.carousel.on_move(f);
    }

    pub fn next(&mut self) -> bool {
        let moved = self.carousel.next();
        self.after_move(moved)
    }

    pub fn prev(&mut self) -> bool {
        let moved = self.carousel.prev();
        self.after_move(moved)
    }

    pub fn go_to_item(&mut self, index: isize) -> bool {
        let moved = self.carousel.go_to_item(index);
        self.after_move(moved)
    }

    pub fn on_key_up(&mut self, key: Key) -> bool {
        let moved = self.carousel.on_key_up(key);
        self.after_move(moved)
    }

    /// A click on one of the navigation controls.
    pub fn click(&mut self, control: Control) -> bool {
        match control {
            Control::Next => self.next(),
            Control::Prev => self.prev(),
        }
    }

    /// Returns `true` when the viewport crossed the breakpoint and the DOM was relaid out.
    pub fn on_resize(&mut self, viewport_width: u32) -> bool {
        if !self.carousel.on_resize(viewport_width) {
            return false;
        }
        self.sync_layout();
        self.sync_nav();
        true
    }

    fn after_move(&mut self, moved: bool) -> bool {
        if moved {
            let transform = self.carousel.transform().css();
            self.root_child_mut(CONTAINER_AT)
                .set_style("transform", transform);
            self.sync_nav();
        }
        moved
    }

    fn sync_layout(&mut self) {
        let layout = self.carousel.layout();
        let container = self.root_child_mut(CONTAINER_AT);
        container.set_style("width", layout.container_width_css());
        let slide_width = layout.slide_width_css();
        for item in container.child_elements_mut() {
            item.set_style("width", slide_width.clone());
        }
    }

    fn sync_nav(&mut self) {
        let nav = self.carousel.nav();
        self.root_child_mut(PREV_AT)
            .toggle_class(class::PREV_HIDDEN, nav.prev_hidden);
        self.root_child_mut(NEXT_AT)
            .toggle_class(class::NEXT_HIDDEN, nav.next_hidden);
    }

    fn root_child(&self, at: usize) -> &Element<T> {
        self.root().children()[at]
            .as_element()
            .unwrap_or_else(|| unreachable!("carousel root holds only elements"))
    }

    fn root_child_mut(&mut self, at: usize) -> &mut Element<T> {
        self.host.children_mut()[self.root_at]
            .as_element_mut()
            .and_then(|root| root.children_mut()[at].as_element_mut())
            .unwrap_or_else(|| unreachable!("carousel root holds only elements"))
    }
}
