//! Widget configuration, option resolution, and the stable element identifiers.

use serde::{Deserialize, Serialize};

use crate::error::SliderError;

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: i32 = 0;
/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: i32 = 21;
/// Default id of the container element the controls are appended to.
pub const DEFAULT_CONTAINER_ID: &str = "zoomSlider";

/// Element id of the increase control.
pub const INCREASE_CONTROL_ID: &str = "incZoom";
/// Element id of the decrease control.
pub const DECREASE_CONTROL_ID: &str = "decZoom";
/// Element id of the range input.
pub const RANGE_CONTROL_ID: &str = "slide";
/// Class shared by both zoom buttons.
pub const ZOOM_BUTTON_CLASS: &str = "zoomBtn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Resolved widget configuration.
pub struct ZoomSliderConfig {
    /// Lowest zoom the range input allows.
    pub min_zoom: i32,
    /// Highest zoom the range input allows.
    pub max_zoom: i32,
    /// Id of the pre-existing container element.
    pub container_id: String,
}

impl Default for ZoomSliderConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl ZoomSliderConfig {
    /// Checks the `min_zoom <= max_zoom` invariant.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidBounds`] when the bounds are inverted.
    pub fn validate(&self) -> Result<(), SliderError> {
        if self.min_zoom > self.max_zoom {
            return Err(SliderError::InvalidBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Caller-facing options where every field is optional.
///
/// Zero and empty values count as "not provided", so `{ maxZoom: 0 }` resolves to the
/// default upper bound the same way an omitted field does.
pub struct ZoomSliderOptions {
    /// Optional lower bound.
    pub min_zoom: Option<i32>,
    /// Optional upper bound.
    pub max_zoom: Option<i32>,
    /// Optional container id.
    pub container_id: Option<String>,
}

impl ZoomSliderOptions {
    /// Parses options from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidOptions`] when the text is not a valid options object.
    pub fn from_json(raw: &str) -> Result<Self, SliderError> {
        serde_json::from_str(raw).map_err(|err| SliderError::InvalidOptions(err.to_string()))
    }

    /// Fills in defaults for missing or falsy fields.
    pub fn resolve(self) -> ZoomSliderConfig {
        let defaults = ZoomSliderConfig::default();
        ZoomSliderConfig {
            min_zoom: self
                .min_zoom
                .filter(|zoom| *zoom != 0)
                .unwrap_or(defaults.min_zoom),
            max_zoom: self
                .max_zoom
                .filter(|zoom| *zoom != 0)
                .unwrap_or(defaults.max_zoom),
            container_id: self
                .container_id
                .filter(|id| !id.is_empty())
                .unwrap_or(defaults.container_id),
        }
    }
}

impl From<ZoomSliderOptions> for ZoomSliderConfig {
    fn from(options: ZoomSliderOptions) -> Self {
        options.resolve()
    }
}

/// Parses a committed range value the way browsers parse integer attributes: leading
/// whitespace, an optional sign, then as many digits as are present.
///
/// Returns `None` when no digits lead the text or the number overflows `i32`.
pub fn parse_zoom_value(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len].parse::<i64>().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
