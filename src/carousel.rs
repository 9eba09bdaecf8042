use crate::constants::AUTOPLAY_INTERVAL;

/// Sign of the last pagination step; selects which side slides enter from.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    pub fn from_delta(delta: i64) -> Self {
        match delta.signum() {
            1 => Direction::Forward,
            -1 => Direction::Backward,
            _ => Direction::Still,
        }
    }

    pub fn sign(self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

/// Recurring timer driven by frame deltas.
#[derive(Debug, PartialEq)]
pub struct AutoplayTimer {
    interval: f32,
    elapsed: f32,
}

impl AutoplayTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Advances the clock and returns how many intervals completed.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.elapsed += dt.max(0.0);
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    pub fn remaining(&self) -> f32 {
        self.interval - self.elapsed
    }
}

/// Index into a photo sequence of length `len`: `|page| mod len`.
pub fn wrap_index(page: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((page.unsigned_abs() % len as u64) as usize)
}

#[derive(Debug)]
pub struct Carousel {
    page: i64,
    direction: Direction,
    interval: f32,
    autoplay: Option<AutoplayTimer>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(AUTOPLAY_INTERVAL)
    }
}

impl Carousel {
    pub fn new(interval: f32) -> Self {
        Self {
            page: 0,
            direction: Direction::Still,
            interval,
            autoplay: None,
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn paginate(&mut self, delta: i64) {
        self.page = self.page.wrapping_add(delta);
        self.direction = Direction::from_delta(delta);
    }

    pub fn photo_index(&self, len: usize) -> Option<usize> {
        wrap_index(self.page, len)
    }

    pub fn start_autoplay(&mut self) {
        if self.autoplay.is_none() {
            tracing::debug!(interval = self.interval, "carousel autoplay started");
            self.autoplay = Some(AutoplayTimer::new(self.interval));
        }
    }

    pub fn stop_autoplay(&mut self) {
        if self.autoplay.take().is_some() {
            tracing::debug!(page = self.page, "carousel autoplay stopped");
        }
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn autoplay(&self) -> Option<&AutoplayTimer> {
        self.autoplay.as_ref()
    }

    /// Feeds frame time to the autoplay timer, advancing one page per tick.
    pub fn tick(&mut self, dt: f32) -> u32 {
        let fired = match self.autoplay.as_mut() {
            Some(timer) => timer.tick(dt),
            None => 0,
        };
        for _ in 0..fired {
            self.paginate(1);
        }
        fired
    }
}
