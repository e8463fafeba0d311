#![forbid(unsafe_code)]

//! Platform capability probing.
//!
//! The carousel needs three facts about its host before it can bind: whether
//! pointer input arrives as touch or mouse events, which (possibly
//! vendor-prefixed) style property drives transforms, and whether 3-D
//! transforms are usable. [`probe`] answers all of them once, from an injected
//! [`FeatureSource`], and returns an immutable [`Capabilities`] value that is
//! handed to the transform driver and the carousel at construction time.
//!
//! # Fail-Open Guarantee
//!
//! Missing support is never an error. A host without any transform property
//! yields [`OffsetStrategy::LeftOffset`]; a host without a transition
//! duration property makes transition toggling a no-op.
//!
//! # Usage
//!
//! ```
//! use glide_core::caps::{probe, OffsetStrategy, StaticFeatures};
//!
//! let features = StaticFeatures::new()
//!     .with_property("WebkitTransform")
//!     .with_property("WebkitTransitionDuration");
//! let caps = probe(&features);
//! assert_eq!(caps.transform_property.as_deref(), Some("WebkitTransform"));
//! assert_eq!(caps.offset_strategy(), OffsetStrategy::Translate);
//! ```

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Vendor prefixes tried in order; the empty prefix is the standard name.
const VENDOR_PREFIXES: [&str; 5] = ["Webkit", "Moz", "O", "ms", ""];

/// Old Android stock browsers break form inputs under 3-D transforms.
const LEGACY_ANDROID_PATTERN: &str = r"(?i)android\s+[1-2]";

/// Read-only view of the host platform used by [`probe`].
pub trait FeatureSource {
    /// Whether the host delivers touch events (`ontouchend` exists).
    fn has_touch_events(&self) -> bool;

    /// Whether a style declaration accepts the given property name.
    fn supports_style_property(&self, name: &str) -> bool;

    /// Whether a CSS matrix type with 3-D components is available.
    fn has_css_matrix(&self) -> bool;

    /// The host user agent string.
    fn user_agent(&self) -> &str;
}

/// Plain-data [`FeatureSource`] for hosts that already know their features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticFeatures {
    touch: bool,
    properties: HashSet<String>,
    css_matrix: bool,
    user_agent: String,
}

impl StaticFeatures {
    /// Empty feature set: mouse input, no style properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set touch support.
    #[must_use]
    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    /// Declare a supported style property (already prefixed).
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        self.properties.insert(name.into());
        self
    }

    /// Set CSS matrix availability.
    #[must_use]
    pub fn with_css_matrix(mut self, available: bool) -> Self {
        self.css_matrix = available;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// A modern browser with unprefixed transforms and 3-D support.
    #[must_use]
    pub fn modern(touch: bool) -> Self {
        Self::new()
            .with_touch(touch)
            .with_property("transform")
            .with_property("transition")
            .with_property("transitionDuration")
            .with_css_matrix(true)
    }
}

impl FeatureSource for StaticFeatures {
    fn has_touch_events(&self) -> bool {
        self.touch
    }

    fn supports_style_property(&self, name: &str) -> bool {
        self.properties.contains(name)
    }

    fn has_css_matrix(&self) -> bool {
        self.css_matrix
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// How pointer input reaches the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// `touchstart` / `touchmove` / `touchend`.
    Touch,
    /// `mousedown` / `mousemove` / `mouseup`.
    Mouse,
}

impl InputMode {
    /// Host event name for pointer-down.
    #[must_use]
    pub const fn down_event(self) -> &'static str {
        match self {
            Self::Touch => "touchstart",
            Self::Mouse => "mousedown",
        }
    }

    /// Host event name for pointer-move.
    #[must_use]
    pub const fn move_event(self) -> &'static str {
        match self {
            Self::Touch => "touchmove",
            Self::Mouse => "mousemove",
        }
    }

    /// Host event name for pointer-up.
    #[must_use]
    pub const fn up_event(self) -> &'static str {
        match self {
            Self::Touch => "touchend",
            Self::Mouse => "mouseup",
        }
    }
}

/// Technique used to offset the track, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetStrategy {
    /// `translate3d(x, 0, 0)` on the transform property.
    Translate3d,
    /// `translate(x, 0)` on the transform property.
    Translate,
    /// Plain `left` offset.
    LeftOffset,
}

/// Immutable result of [`probe`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Touch events are available.
    pub touch: bool,
    /// Resolved transform property name, if any.
    pub transform_property: Option<String>,
    /// Resolved transition-duration property name, if any.
    pub transition_duration_property: Option<String>,
    /// 3-D transforms are usable.
    pub transform3d: bool,
}

impl Capabilities {
    /// Input family the carousel should listen to.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.touch {
            InputMode::Touch
        } else {
            InputMode::Mouse
        }
    }

    /// Best available offset technique.
    #[must_use]
    pub fn offset_strategy(&self) -> OffsetStrategy {
        match (&self.transform_property, self.transform3d) {
            (Some(_), true) => OffsetStrategy::Translate3d,
            (Some(_), false) => OffsetStrategy::Translate,
            (None, _) => OffsetStrategy::LeftOffset,
        }
    }
}

/// Probe the host once and freeze the answers.
pub fn probe(source: &impl FeatureSource) -> Capabilities {
    let transform_property = prefixed_property(source, "Transform");
    let transition_duration_property = prefixed_property(source, "TransitionDuration");
    let transform3d = transform_property.is_some()
        && source.has_css_matrix()
        && !is_legacy_android(source.user_agent());

    let caps = Capabilities {
        touch: source.has_touch_events(),
        transform_property,
        transition_duration_property,
        transform3d,
    };

    tracing::debug!(
        message = "caps.probe",
        touch = caps.touch,
        transform = ?caps.transform_property,
        transform3d = caps.transform3d
    );

    caps
}

/// Resolve a style property to the first supported vendor-prefixed spelling.
///
/// The standard (unprefixed) spelling of `Transform` is `transform`; the
/// unprefixed candidate is tried in both capitalizations.
pub fn prefixed_property(source: &impl FeatureSource, name: &str) -> Option<String> {
    for prefix in VENDOR_PREFIXES {
        if prefix.is_empty() {
            let lower = lower_first(name);
            if source.supports_style_property(&lower) {
                return Some(lower);
            }
            if source.supports_style_property(name) {
                return Some(name.to_string());
            }
            continue;
        }
        let candidate = format!("{prefix}{name}");
        if source.supports_style_property(&candidate) {
            return Some(candidate);
        }
    }
    None
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_legacy_android(ua: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(LEGACY_ANDROID_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(ua))
}
