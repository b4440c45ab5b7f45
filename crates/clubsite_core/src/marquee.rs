use std::time::Duration;

/// Constant-speed scroll offset for an endless logo strip.
///
/// The strip renders its items twice in a row; once a full copy has scrolled
/// past, the offset wraps so the second copy sits exactly where the first began.
#[derive(Debug, Clone, PartialEq)]
pub struct Marquee {
    offset: f64,
    speed: f64,
    content_width: f64,
    paused: bool,
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED, Self::DEFAULT_CONTENT_WIDTH)
    }
}

impl Marquee {
    /// Pixels per second.
    pub const DEFAULT_SPEED: f64 = 64.0;
    pub const DEFAULT_CONTENT_WIDTH: f64 = 1920.0;

    /// A non-finite speed leaves the strip standing still.
    pub fn new(speed: f64, content_width: f64) -> Self {
        Self {
            offset: 0.0,
            speed: if speed.is_finite() { speed } else { 0.0 },
            content_width,
            paused: false,
        }
    }

    /// Advances by `speed * delta` modulo the content width and returns the
    /// new offset. Does nothing while paused.
    pub fn tick(&mut self, delta: Duration) -> f64 {
        if self.paused {
            return self.offset;
        }
        if self.content_width <= 0.0 || !self.content_width.is_finite() {
            self.offset = 0.0;
            return self.offset;
        }
        let advanced = self.offset + self.speed * delta.as_secs_f64();
        self.offset = if advanced.is_finite() {
            advanced.rem_euclid(self.content_width)
        } else {
            0.0
        };
        self.offset
    }

    /// Hover state; resuming continues from the current offset.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

/// The item list repeated twice, as the strip renders it.
pub fn loop_track<T: Clone>(items: &[T]) -> Vec<T> {
    let mut track = Vec::with_capacity(items.len() * 2);
    track.extend_from_slice(items);
    track.extend_from_slice(items);
    track
}
