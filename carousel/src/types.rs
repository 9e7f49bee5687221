use alloc::format;
use alloc::string::String;

/// Viewport widths strictly below this are laid out in mobile mode.
pub const MOBILE_BREAKPOINT: u32 = 800;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// One slide visible, one slide per step, regardless of configuration.
    Mobile,
    /// Configured counts apply.
    Desktop,
}

impl Mode {
    pub fn for_viewport_width(width: u32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Widths, in percent, for the sliding container and for each slide inside it.
///
/// The container is `slide_count / visible` viewports wide; each slide takes `100 / slide_count`
/// percent of the container so that exactly `visible` slides cover the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub container_width: f64,
    pub slide_width: f64,
}

impl Layout {
    pub fn compute(slide_count: usize, visible: usize) -> Self {
        let ratio = slide_count as f64 / visible as f64;
        Self {
            container_width: ratio * 100.0,
            slide_width: 100.0 / visible as f64 / ratio,
        }
    }

    pub fn container_width_css(&self) -> String {
        percent(self.container_width)
    }

    pub fn slide_width_css(&self) -> String {
        percent(self.slide_width)
    }
}

/// Horizontal translation of the sliding container, in percent of its own width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub translate_x: f64,
}

impl Transform {
    pub fn for_index(index: usize, slide_count: usize) -> Self {
        Self {
            translate_x: index as f64 * -100.0 / slide_count as f64,
        }
    }

    /// Inline `transform` value, e.g. `translate3d(-25%, 0,0)`.
    pub fn css(&self) -> String {
        format!("translate3d({}, 0,0)", percent(self.translate_x))
    }
}

fn percent(value: f64) -> String {
    // `-0` would otherwise render as "-0%".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}%")
}

/// Visibility of the previous/next controls, as decided by the built-in move observer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    pub prev_hidden: bool,
    pub next_hidden: bool,
}

/// Keys the carousel reacts to on key-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value, accepting the legacy `Left`/`Right` names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            _ => Self::Other,
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
