//! Entrance animations
//!
//! Each animation is described by its starting [`Frame`] and timing; the
//! element always settles at full opacity with no transform. Rendering
//! produces inline CSS that drives the `gd-enter` keyframes in
//! `style/site.css` through custom properties.

use std::fmt::Write;

/// Timing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    #[default]
    EaseOut,
}

impl Ease {
    pub fn as_css(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseOut => "ease-out",
        }
    }
}

/// Visual state an element animates from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    /// Horizontal offset in px
    pub x: i32,
    /// Vertical offset in px
    pub y: i32,
    pub scale: f32,
}

impl Frame {
    pub const HIDDEN: Frame = Frame { opacity: 0.0, x: 0, y: 0, scale: 1.0 };

    pub const fn offset(x: i32, y: i32) -> Self {
        Frame { x, y, ..Self::HIDDEN }
    }

    pub const fn scaled(scale: f32) -> Self {
        Frame { scale, ..Self::HIDDEN }
    }

    pub const fn with_scale(self, scale: f32) -> Self {
        Frame { scale, ..self }
    }

    fn transform(&self) -> String {
        let mut out = format!("translate({}px, {}px)", self.x, self.y);
        if self.scale != 1.0 {
            let _ = write!(out, " scale({})", self.scale);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Frame,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub ease: Ease,
}

impl Motion {
    pub const fn new(from: Frame, duration_ms: u32) -> Self {
        Self {
            from,
            duration_ms,
            delay_ms: 0,
            ease: Ease::EaseOut,
        }
    }

    /// Showroom cards and generic section content
    pub const fn fade_in_up() -> Self {
        Self::new(Frame::offset(0, 60), 800)
    }

    pub const fn fade_in() -> Self {
        Self::new(Frame::HIDDEN, 500)
    }

    /// Navigation bar on first paint
    pub const fn slide_down() -> Self {
        Self::new(Frame::offset(0, -100), 800)
    }

    /// Horizontal slide; negative `x` enters from the left
    pub const fn slide_in(x: i32) -> Self {
        Self::new(Frame::offset(x, 0), 800)
    }

    pub const fn zoom_in() -> Self {
        Self::new(Frame::scaled(0.95), 800)
    }

    /// Mobile menu dropdown
    pub const fn pop_down() -> Self {
        Self::new(Frame::offset(0, -20).with_scale(0.95), 200)
    }

    pub const fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub const fn ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// Delay for the `index`-th child of a staggered group
    pub const fn stagger(self, index: u32, step_ms: u32) -> Self {
        Self {
            delay_ms: self.delay_ms + index * step_ms,
            ..self
        }
    }

    fn from_vars(&self) -> String {
        format!(
            "--gd-from-opacity: {}; --gd-from-transform: {};",
            self.from.opacity,
            self.from.transform()
        )
    }

    /// Inline style that plays the animation
    pub fn style(&self) -> String {
        format!(
            "{} animation: gd-enter {}ms {} {}ms both;",
            self.from_vars(),
            self.duration_ms,
            self.ease.as_css(),
            self.delay_ms
        )
    }

    /// Inline style that holds the element at its starting frame
    pub fn hidden_style(&self) -> String {
        format!(
            "opacity: {}; transform: {};",
            self.from.opacity,
            self.from.transform()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_up_style() {
        assert_eq!(
            Motion::fade_in_up().style(),
            "--gd-from-opacity: 0; --gd-from-transform: translate(0px, 60px); \
             animation: gd-enter 800ms ease-out 0ms both;"
        );
    }

    #[test]
    fn test_scale_is_rendered_only_when_set() {
        let style = Motion::pop_down().hidden_style();
        assert_eq!(style, "opacity: 0; transform: translate(0px, -20px) scale(0.95);");
        assert!(!Motion::slide_in(-50).hidden_style().contains("scale"));
    }

    #[test]
    fn test_stagger_adds_step_per_index() {
        let base = Motion::fade_in_up().delay(100);
        let delays: Vec<u32> = (0..3).map(|i| base.stagger(i, 200).delay_ms).collect();
        assert_eq!(delays, [100, 300, 500]);
    }

    #[test]
    fn test_ease_override() {
        let style = Motion::fade_in().ease(Ease::Linear).style();
        assert!(style.contains("500ms linear 0ms"));
    }
}
