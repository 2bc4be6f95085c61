use serde::Serialize;

use crate::error::CarouselError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselMode {
    Autoplaying,
    ManualOverrideCooldown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselState {
    pub active_index: usize,
    pub autoplay_enabled: bool,
}

/// Identifies one manual-override cooldown. Only the most recent token can
/// resume autoplay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CooldownToken(u64);

/// Active slide and autoplay mode for a rotating display of `len` slides.
///
/// This is the pure state machine: it never sleeps. Timers live in
/// [`crate::driver::CarouselHandle`], which feeds `tick` and
/// `cooldown_expires` into it.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    active: usize,
    mode: CarouselMode,
    generation: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }

        Ok(Self {
            len,
            active: 0,
            mode: CarouselMode::Autoplaying,
            generation: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn mode(&self) -> CarouselMode {
        self.mode
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            active_index: self.active,
            autoplay_enabled: self.mode == CarouselMode::Autoplaying,
        }
    }

    /// Advances one slide if autoplay is running. Returns whether it moved.
    pub fn tick(&mut self) -> bool {
        if self.mode != CarouselMode::Autoplaying {
            return false;
        }
        self.active = (self.active + 1) % self.len;
        true
    }

    pub fn next(&mut self) -> CooldownToken {
        self.active = (self.active + 1) % self.len;
        self.begin_cooldown()
    }

    pub fn prev(&mut self) -> CooldownToken {
        self.active = (self.active + self.len - 1) % self.len;
        self.begin_cooldown()
    }

    pub fn go_to(&mut self, index: usize) -> Result<CooldownToken, CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.active = index;
        Ok(self.begin_cooldown())
    }

    /// Resumes autoplay if `token` belongs to the latest manual navigation.
    pub fn cooldown_expires(&mut self, token: CooldownToken) -> bool {
        if self.mode != CarouselMode::ManualOverrideCooldown || token.0 != self.generation {
            return false;
        }
        self.mode = CarouselMode::Autoplaying;
        true
    }

    fn begin_cooldown(&mut self) -> CooldownToken {
        self.generation += 1;
        self.mode = CarouselMode::ManualOverrideCooldown;
        CooldownToken(self.generation)
    }
}
