//! A headless carousel (slideshow) engine.
//!
//! For DOM construction, event wiring and page bootstrapping, see the `carousel-dom` crate.
//!
//! This crate holds the widget's state machine and layout math: the current slide index,
//! next/previous paging by a configurable step, optional wrap-around at both ends, and the
//! mobile/desktop breakpoint that forces a one-slide layout on narrow viewports.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - the number of slides
//! - viewport width changes
//! - key-up events (or direct `next`/`prev` calls from its own controls)
//!
//! and to apply the resulting [`Layout`], [`Transform`] and [`NavState`] to its elements.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod error;
mod options;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use error::OptionsError;
pub use options::{CarouselOptions, MoveCallback};
pub use types::{Key, Layout, MOBILE_BREAKPOINT, Mode, NavState, Transform};
