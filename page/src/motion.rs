//! Entrance and hover animation metadata.
//!
//! Animations are described as plain data and rendered to inline CSS
//! declarations. The keyframes they refer to (`fade-in`, `enter`) live in
//! [`crate::styles::PAGE_CSS`].

/// Opacity fade from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    /// Duration in seconds
    pub duration: f32,
}

impl Fade {
    /// Inline style for an element fading in after `delay` seconds.
    pub fn style(&self, delay: f32) -> String {
        format!(
            "animation: fade-in {}s ease-out {}s both;",
            secs(self.duration),
            secs(delay)
        )
    }
}

/// Fade plus slide from an offset back to the element's resting position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    /// Horizontal start offset in pixels
    pub offset_x: i32,
    /// Vertical start offset in pixels
    pub offset_y: i32,
    /// Delay added per list index, in seconds
    pub step_delay: f32,
    /// Duration in seconds
    pub duration: f32,
}

impl Entrance {
    /// Delay in seconds for the item at `index`.
    pub fn delay(&self, index: usize) -> f32 {
        index as f32 * self.step_delay
    }

    /// Inline style for the list item at `index`.
    pub fn style(&self, index: usize) -> String {
        format!(
            "--enter-x: {}px; --enter-y: {}px; animation: enter {}s ease-out {}s both;",
            self.offset_x,
            self.offset_y,
            secs(self.duration),
            secs(self.delay(index))
        )
    }
}

/// Icon rotation toggled by hover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    /// Rotation when active, in degrees
    pub degrees: u16,
    /// Transition duration in seconds
    pub duration: f32,
}

impl Spin {
    /// Inline style for the icon in the given state.
    pub fn style(&self, active: bool) -> String {
        let degrees = if active { self.degrees } else { 0 };
        format!(
            "transform: rotate({}deg); transition: transform {}s ease-in-out;",
            degrees,
            secs(self.duration)
        )
    }
}

/// Scale feedback on a pressable control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
    /// Scale while hovered
    pub hover_scale: f32,
    /// Scale while pressed
    pub tap_scale: f32,
}

impl Press {
    /// CSS custom properties consumed by the `.cta-motion` rules.
    pub fn style(&self) -> String {
        format!(
            "--hover-scale: {}; --tap-scale: {};",
            self.hover_scale, self.tap_scale
        )
    }
}

/// Header and section fade.
pub const FADE_IN: Fade = Fade { duration: 0.5 };

/// Delay between consecutive feature cards.
pub const CARD_STAGGER: f32 = 0.1;

/// Benefit lines slide in from the left.
pub const BENEFIT_ENTRANCE: Entrance = Entrance {
    offset_x: -50,
    offset_y: 0,
    step_delay: 0.1,
    duration: 0.5,
};

/// Process steps rise from below.
pub const STEP_ENTRANCE: Entrance = Entrance {
    offset_x: 0,
    offset_y: 20,
    step_delay: 0.2,
    duration: 0.5,
};

/// Feature icon spin on hover.
pub const ICON_SPIN: Spin = Spin {
    degrees: 360,
    duration: 0.5,
};

/// Call-to-action button feedback.
pub const CTA_PRESS: Press = Press {
    hover_scale: 1.05,
    tap_scale: 0.95,
};

// Round to centiseconds so 3 * 0.1 prints as 0.3, not 0.30000001
fn secs(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}
