#![forbid(unsafe_code)]

//! Carousel options.
//!
//! [`CarouselConfig`] can be built in code with the `with_*` methods or
//! parsed from the host's option object with [`CarouselConfig::from_json`].
//! Keys are camelCase (`dragRadius`, `autoHideArrows`, `classNames`, ...)
//! and every key is optional.
//!
//! `classNames` merges per role: overriding `active` keeps the default
//! suffixes for every other role.
//!
//! `autoplay` is either `false` or `{ "interval": <ms>, "cancelOnInteraction":
//! <bool> }`. A malformed autoplay value (missing or non-numeric interval,
//! interval of 1 ms or less) leaves autoplay disarmed rather than failing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use web_time::Duration;

use glide_core::gesture::GestureConfig;

use crate::error::ConfigError;

/// Semantic role of a class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassRole {
    /// Outer container.
    Outer,
    /// Sliding track.
    Inner,
    /// Slide element.
    Item,
    /// Container modifier: center-aligned slides.
    Center,
    /// Container marker: host has touch input.
    Touch,
    /// Track marker: transitions are disabled.
    Dragging,
    /// Current slide and its indicator.
    Active,
    /// Disabled prev/next control.
    Inactive,
    /// Container modifier: variable slide widths.
    Fluid,
}

/// Class suffix per role; the configured prefix is prepended.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Outer container (default `scooch`).
    pub outer: String,
    /// Sliding track (default `scooch-inner`).
    pub inner: String,
    /// Slide element (default `item`).
    pub item: String,
    /// Center alignment modifier (default `center`).
    pub center: String,
    /// Touch marker (default `has-touch`).
    pub touch: String,
    /// Dragging marker (default `dragging`).
    pub dragging: String,
    /// Active marker (default `active`).
    pub active: String,
    /// Inactive control marker (default `inactive`).
    pub inactive: String,
    /// Fluid width modifier (default `fluid`).
    pub fluid: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            outer: "scooch".to_string(),
            inner: "scooch-inner".to_string(),
            item: "item".to_string(),
            center: "center".to_string(),
            touch: "has-touch".to_string(),
            dragging: "dragging".to_string(),
            active: "active".to_string(),
            inactive: "inactive".to_string(),
            fluid: "fluid".to_string(),
        }
    }
}

impl ClassNames {
    /// Suffix for `role`.
    #[must_use]
    pub fn get(&self, role: ClassRole) -> &str {
        match role {
            ClassRole::Outer => &self.outer,
            ClassRole::Inner => &self.inner,
            ClassRole::Item => &self.item,
            ClassRole::Center => &self.center,
            ClassRole::Touch => &self.touch,
            ClassRole::Dragging => &self.dragging,
            ClassRole::Active => &self.active,
            ClassRole::Inactive => &self.inactive,
            ClassRole::Fluid => &self.fluid,
        }
    }

    /// Replace the suffix for `role`.
    pub fn set(&mut self, role: ClassRole, suffix: impl Into<String>) {
        let slot = match role {
            ClassRole::Outer => &mut self.outer,
            ClassRole::Inner => &mut self.inner,
            ClassRole::Item => &mut self.item,
            ClassRole::Center => &mut self.center,
            ClassRole::Touch => &mut self.touch,
            ClassRole::Dragging => &mut self.dragging,
            ClassRole::Active => &mut self.active,
            ClassRole::Inactive => &mut self.inactive,
            ClassRole::Fluid => &mut self.fluid,
        };
        *slot = suffix.into();
    }
}

/// Timer-driven auto-advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayConfig {
    /// Period in milliseconds.
    pub interval: f64,
    /// Stop on the first touch, click or hover.
    pub cancel_on_interaction: bool,
}

impl AutoplayConfig {
    /// Autoplay every `interval_ms` milliseconds.
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval: interval_ms,
            cancel_on_interaction: false,
        }
    }

    /// Set cancel-on-interaction.
    #[must_use]
    pub fn cancel_on_interaction(mut self, cancel: bool) -> Self {
        self.cancel_on_interaction = cancel;
        self
    }

    /// The timer period, or `None` when the interval cannot arm a timer.
    #[must_use]
    pub fn interval_duration(&self) -> Option<Duration> {
        if !self.interval.is_finite() || self.interval <= 1.0 {
            return None;
        }
        Duration::try_from_secs_f64(self.interval / 1000.0).ok()
    }

    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let interval = object.get("interval").and_then(Value::as_f64)?;
        let cancel_on_interaction = object
            .get("cancelOnInteraction")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Some(Self {
            interval,
            cancel_on_interaction,
        })
    }
}

fn deserialize_autoplay<'de, D>(deserializer: D) -> Result<Option<AutoplayConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let autoplay = AutoplayConfig::from_value(&value);
    if autoplay.is_none() && !matches!(value, Value::Null | Value::Bool(false)) {
        tracing::debug!(message = "config.autoplay_disarmed", value = %value);
    }
    Ok(autoplay)
}

/// Carousel options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Movement (px) before a gesture is classified (default 10).
    pub drag_radius: f64,
    /// Drag distance (px) needed to change slides (default 20).
    pub move_radius: f64,
    /// Animate slide changes (default true).
    pub animate: bool,
    /// Mark prev/next controls inactive at the ends (default false).
    pub auto_hide_arrows: bool,
    /// Reverse drag direction semantics (default false).
    pub right_to_left: bool,
    /// Wrap around with cloned slides (default false).
    pub infinite: bool,
    /// Auto-advance timer (default off).
    #[serde(deserialize_with = "deserialize_autoplay")]
    pub autoplay: Option<AutoplayConfig>,
    /// Prefix for every class name (default `m-`).
    pub class_prefix: String,
    /// Class suffixes per role.
    pub class_names: ClassNames,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_radius: 10.0,
            move_radius: 20.0,
            animate: true,
            auto_hide_arrows: false,
            right_to_left: false,
            infinite: false,
            autoplay: None,
            class_prefix: "m-".to_string(),
            class_names: ClassNames::default(),
        }
    }
}

impl CarouselConfig {
    /// Parse a JSON option object, filling defaults for missing keys.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject radii that cannot be compared against pixel distances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("dragRadius", self.drag_radius),
            ("moveRadius", self.move_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRadius { name, value });
            }
        }
        Ok(())
    }

    /// Full class name (prefix + suffix) for `role`.
    #[must_use]
    pub fn class(&self, role: ClassRole) -> String {
        format!("{}{}", self.class_prefix, self.class_names.get(role))
    }

    /// Thresholds for the swipe recognizer.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            drag_radius: self.drag_radius,
            move_radius: self.move_radius,
            right_to_left: self.right_to_left,
        }
    }

    /// Whether autoplay will actually arm a timer.
    #[must_use]
    pub fn autoplay_armed(&self) -> bool {
        self.autoplay
            .as_ref()
            .and_then(AutoplayConfig::interval_duration)
            .is_some()
    }

    /// Set the drag radius.
    #[must_use]
    pub fn with_drag_radius(mut self, px: f64) -> Self {
        self.drag_radius = px;
        self
    }

    /// Set the move radius.
    #[must_use]
    pub fn with_move_radius(mut self, px: f64) -> Self {
        self.move_radius = px;
        self
    }

    /// Enable or disable animated slide changes.
    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Enable or disable arrow hiding at the ends.
    #[must_use]
    pub fn with_auto_hide_arrows(mut self, hide: bool) -> Self {
        self.auto_hide_arrows = hide;
        self
    }

    /// Reverse drag direction semantics.
    #[must_use]
    pub fn with_right_to_left(mut self, rtl: bool) -> Self {
        self.right_to_left = rtl;
        self
    }

    /// Enable or disable infinite looping.
    #[must_use]
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Configure autoplay.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: AutoplayConfig) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    /// Set the class prefix.
    #[must_use]
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Override one class suffix.
    #[must_use]
    pub fn with_class_name(mut self, role: ClassRole, suffix: impl Into<String>) -> Self {
        self.class_names.set(role, suffix);
        self
    }
}
