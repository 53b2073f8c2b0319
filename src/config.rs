//! Runtime options for a picker screen.

use crate::color::SolidColor;
use crate::constants;

/// Options used when building or presenting a [`ColorScreen`](crate::ColorScreen).
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Seeds the three sliders. With `None` nothing is derived until every
    /// slider has been touched.
    pub initial: Option<SolidColor>,
    /// Window title when presented.
    pub title: String,
    /// Window size (logical pixels) when presented.
    pub window_size: (f64, f64),
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial: Some(SolidColor::default()),
            title: "Color".to_string(),
            window_size: constants::WINDOW_SIZE,
        }
    }
}

impl PickerConfig {
    pub fn initial(mut self, color: Option<SolidColor>) -> Self {
        self.initial = color;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn window_size(mut self, width: f64, height: f64) -> Self {
        self.window_size = (width, height);
        self
    }
}
