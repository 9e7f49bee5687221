use alloc::sync::Arc;

use crate::OptionsError;

/// A callback fired with the new index after every accepted move.
///
/// Also fired with the current index when the layout flips between mobile and desktop.
pub type MoveCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Immutable once the carousel is built. In mobile mode the carousel overrides both counts with
/// 1; see [`crate::Carousel::slides_visible`] and [`crate::Carousel::slides_to_scroll`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` using the camelCase
/// keys of the page-level configuration (`slidesToScroll`, `slidesVisible`, `loop`). Missing
/// keys fall back to their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CarouselOptions {
    /// How many slides `next`/`prev` move by.
    pub slides_to_scroll: usize,
    /// How many slides share the viewport at once.
    pub slides_visible: usize,
    /// Wrap around at both ends instead of stopping.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slides_to_scroll: 1,
            slides_visible: 1,
            looping: false,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slides_to_scroll(mut self, slides_to_scroll: usize) -> Self {
        self.slides_to_scroll = slides_to_scroll;
        self
    }

    pub fn with_slides_visible(mut self, slides_visible: usize) -> Self {
        self.slides_visible = slides_visible;
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Checks that both counts are positive.
    ///
    /// `Carousel::new` accepts anything; a zero `slides_visible` produces non-finite layout
    /// percentages.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.slides_to_scroll == 0 {
            return Err(OptionsError::ZeroSlidesToScroll);
        }
        if self.slides_visible == 0 {
            return Err(OptionsError::ZeroSlidesVisible);
        }
        Ok(())
    }
}
