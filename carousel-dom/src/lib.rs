//! DOM adapter for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and only tracks paging state and layout math. This
//! crate provides the pieces a page needs around it, without binding to a real browser:
//!
//! - a minimal headless element tree ([`Element`], [`Node`])
//! - [`CarouselWidget`]: wraps a host's children into slides, builds the root, container and
//!   navigation controls, and mirrors carousel state into inline styles and classes
//! - [`Page`]: host lookup by id plus resize/key-up/click dispatch, with explicit
//!   [`Page::dispose`] for listener teardown
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dom;
mod page;
mod widget;


pub use dom::{Element, Node};
pub use page::{Page, WidgetId};
pub use widget::{CarouselWidget, Control, class};
