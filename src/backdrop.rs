//! Decorative section backgrounds: a star field in dark mode and a grid in
//! light mode, plus the radial glow that follows the pointer.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub delay: f64,
    pub duration: f64,
    pub opacity: f64,
}

impl Star {
    /// Draws one star from a source of uniform values in `[0, 1)`.
    pub fn sample(random: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: random() * 100.0,
            y: random() * 100.0,
            size: random() * 2.0 + 1.0,
            delay: random() * 3.0,
            duration: random() * 3.0 + 2.0,
            opacity: random() * 0.8 + 0.2,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; \
             animation-delay: {:.2}s; animation-duration: {:.2}s; \
             box-shadow: 0 0 {:.2}px rgba(255, 255, 255, 0.8);",
            self.x,
            self.y,
            self.size,
            self.size,
            self.opacity,
            self.delay,
            self.duration,
            self.size * 2.0
        )
    }
}

pub fn star_field(count: usize, mut random: impl FnMut() -> f64) -> Vec<Star> {
    (0..count).map(|_| Star::sample(&mut random)).collect()
}

/// Pointer position as a percentage of the viewport, clamped to `0..=100`.
pub fn pointer_percent(client: f64, viewport: f64) -> f64 {
    if viewport <= 0.0 {
        return 0.0;
    }
    (client / viewport * 100.0).clamp(0.0, 100.0)
}

pub fn pointer_glow_style(x_percent: f64, y_percent: f64) -> String {
    format!(
        "background: radial-gradient(circle at {x_percent:.2}% {y_percent:.2}%, \
         rgba(99, 102, 241, 0.1), rgba(168, 85, 247, 0.1), transparent 50%);"
    )
}

pub const GRID_STYLE: &str = "background-image: \
    linear-gradient(to right, #E5E5E5 1px, transparent 1px), \
    linear-gradient(to bottom, #E5E5E5 1px, transparent 1px); \
    background-size: 40px 40px;";

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn lowest_draw_gives_minimum_star() {
        let star = Star::sample(&mut fixed(0.0));
        assert_eq!(star.size, 1.0);
        assert_eq!(star.duration, 2.0);
        assert_eq!(star.opacity, 0.2);
    }

    #[test]
    fn star_values_stay_in_range() {
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let lcg = move || {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            (state >> 11) as f64 / (1u64 << 53) as f64
        };

        let stars = star_field(100, lcg);
        assert_eq!(stars.len(), 100);
        for star in stars {
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((1.0..3.0).contains(&star.size));
            assert!((0.0..3.0).contains(&star.delay));
            assert!((2.0..5.0).contains(&star.duration));
            assert!((0.2..1.0).contains(&star.opacity));
        }
    }

    #[test]
    fn same_source_gives_same_field() {
        assert_eq!(star_field(5, fixed(0.5)), star_field(5, fixed(0.5)));
    }

    #[test]
    fn pointer_percent_clamps_and_handles_zero_viewport() {
        assert_eq!(pointer_percent(640.0, 1_280.0), 50.0);
        assert_eq!(pointer_percent(2_000.0, 1_280.0), 100.0);
        assert_eq!(pointer_percent(10.0, 0.0), 0.0);
    }

    #[test]
    fn glow_style_embeds_position() {
        let style = pointer_glow_style(25.0, 75.5);
        assert!(style.contains("circle at 25.00% 75.50%"));
    }
}
