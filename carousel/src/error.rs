use thiserror::Error;

/// Rejected carousel configuration.
///
/// Returned by [`crate::CarouselOptions::validate`]. Construction itself never validates, so
/// adapters that accept untrusted configuration should call `validate` first.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    /// `slides_to_scroll` must be at least 1.
    #[error("slides_to_scroll must be positive")]
    ZeroSlidesToScroll,

    /// `slides_visible` must be at least 1.
    #[error("slides_visible must be positive")]
    ZeroSlidesVisible,
}
