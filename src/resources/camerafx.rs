//! Timed screen effects for the camera: flash, fade, and shake.
//!
//! Each effect is a small two-phase state machine with explicit
//! transitions:
//! - `start` – arm the effect; a no-op while it is already active unless
//!   `force` is set
//! - `advance` – consume elapsed seconds, moving toward the rest state
//! - `reset` – drop back to the rest state unconditionally
//!
//! Flash and fade share the alpha-ramp shape (flash decays 1 → 0, fade
//! rises toward 1 and holds there); shake produces positional jitter from
//! a countdown. Alphas stay inside [0, 1] by construction.

use fastrand::Rng;

/// Coerce a requested duration to something safely divisible.
///
/// A zero or negative duration completes on the first tick instead of
/// dividing by zero.
fn coerce_duration(duration: f32) -> f32 {
    if duration <= 0.0 {
        f32::MIN_POSITIVE
    } else {
        duration
    }
}

/// Full-screen color flash: alpha snaps to 1, then decays linearly to 0.
#[derive(Debug, Clone)]
pub struct FlashFx {
    duration: f32,
    alpha: f32,
    red: f32,
    green: f32,
    blue: f32,
}

impl Default for FlashFx {
    fn default() -> Self {
        FlashFx {
            duration: 0.0,
            alpha: 0.0,
            red: 1.0,
            green: 1.0,
            blue: 1.0,
        }
    }
}

impl FlashFx {
    /// Arm the flash. Returns `false` when an earlier flash is still
    /// decaying and `force` is not set.
    pub fn start(&mut self, duration: f32, red: f32, green: f32, blue: f32, force: bool) -> bool {
        if !force && self.alpha > 0.0 {
            return false;
        }
        self.red = red;
        self.green = green;
        self.blue = blue;
        self.duration = coerce_duration(duration);
        self.alpha = 1.0;
        true
    }

    /// Consume `delta` seconds of decay.
    pub fn advance(&mut self, delta: f32) {
        if self.alpha > 0.0 {
            self.alpha = (self.alpha - delta / self.duration).max(0.0);
        }
    }

    pub fn reset(&mut self) {
        self.alpha = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.alpha > 0.0
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn color(&self) -> (f32, f32, f32) {
        (self.red, self.green, self.blue)
    }
}

/// Fade to a solid color: alpha rises from near zero toward 1 and holds
/// there until [`FadeFx::reset`] is called.
#[derive(Debug, Clone)]
pub struct FadeFx {
    duration: f32,
    alpha: f32,
    red: f32,
    green: f32,
    blue: f32,
}

impl Default for FadeFx {
    fn default() -> Self {
        FadeFx {
            duration: 0.0,
            alpha: 0.0,
            red: 0.0,
            green: 0.0,
            blue: 0.0,
        }
    }
}

impl FadeFx {
    /// Arm the fade. Returns `false` when a fade is in progress (or has
    /// completed and was not reset) and `force` is not set.
    pub fn start(&mut self, duration: f32, red: f32, green: f32, blue: f32, force: bool) -> bool {
        if !force && self.alpha > 0.0 {
            return false;
        }
        self.red = red;
        self.green = green;
        self.blue = blue;
        self.duration = coerce_duration(duration);
        // Seed just above zero so the ramp is considered active.
        self.alpha = f32::MIN_POSITIVE;
        true
    }

    /// Consume `delta` seconds of ramp. Once the alpha reaches 1 it stays
    /// there; the overlay persists until reset.
    pub fn advance(&mut self, delta: f32) {
        if self.alpha > 0.0 && self.alpha < 1.0 {
            self.alpha = (self.alpha + delta / self.duration).min(1.0);
        }
    }

    pub fn reset(&mut self) {
        self.alpha = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.alpha > 0.0
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn color(&self) -> (f32, f32, f32) {
        (self.red, self.green, self.blue)
    }
}

/// Viewport shake: a countdown during which a fresh random offset is
/// picked every tick, snapping back to exactly zero when it expires.
#[derive(Debug, Clone)]
pub struct ShakeFx {
    duration: f32,
    intensity: f32,
    offset_x: f32,
    offset_y: f32,
    rng: Rng,
}

impl Default for ShakeFx {
    fn default() -> Self {
        ShakeFx {
            duration: 0.0,
            intensity: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            rng: Rng::new(),
        }
    }
}

impl ShakeFx {
    /// Arm the shake. Returns `false` when the camera is currently
    /// displaced by an earlier shake and `force` is not set; a shake that
    /// has been armed but not yet ticked may still be replaced.
    pub fn start(&mut self, duration: f32, intensity: f32, force: bool) -> bool {
        if !force && (self.offset_x != 0.0 || self.offset_y != 0.0) {
            return false;
        }
        self.duration = duration;
        self.intensity = intensity;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        true
    }

    /// Consume `delta` seconds. While the countdown runs, each tick picks
    /// an independent offset per axis in
    /// `[-intensity * size * zoom, intensity * size * zoom]`.
    pub fn advance(&mut self, delta: f32, width: f32, height: f32, zoom: f32) {
        if self.duration <= 0.0 {
            return;
        }
        self.duration -= delta;
        if self.duration <= 0.0 {
            self.offset_x = 0.0;
            self.offset_y = 0.0;
        } else {
            self.offset_x = (self.rng.f32() * 2.0 - 1.0) * self.intensity * width * zoom;
            self.offset_y = (self.rng.f32() * 2.0 - 1.0) * self.intensity * height * zoom;
        }
    }

    pub fn reset(&mut self) {
        self.duration = 0.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.offset_x != 0.0 || self.offset_y != 0.0
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    pub fn remaining(&self) -> f32 {
        self.duration.max(0.0)
    }

    /// Reseed the jitter source, for deterministic replays.
    pub fn seed(&mut self, seed: u64) {
        self.rng = Rng::with_seed(seed);
    }
}
