//! Playback State Machine
//! Step index, play/pause flag, and the single repeating tick timer

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::config::PlayerConfig;
use crate::layout;


/// Bounds for the tick period; [`Player::set_speed`] clamps into this range
/// and the GUI slider spans it.
pub const SPEED_RANGE: RangeInclusive<u64> = 600..=3000;

/// The repeating timer. Exists exactly while the player is playing.
///
/// The host feeds elapsed wall time into [`Player::advance`]; each whole
/// period drained from the accumulator is one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Ticker {
    period: Duration,
    elapsed: Duration,
}

impl Ticker {
    fn new(speed_ms: u64) -> Self {
        Self {
            period: Duration::from_millis(speed_ms),
            elapsed: Duration::ZERO,
        }
    }
}

/// Owns the playback state; all mutation goes through the named transitions
#[derive(Debug, Clone)]
pub struct Player {
    step_count: usize,
    step: usize,
    playing: bool,
    speed_ms: u64,
    scale: f32,
    timer: Option<Ticker>,
}

impl Player {
    /// `step_count` must be at least 1; validated diagrams guarantee it.
    pub fn new(step_count: usize, config: &PlayerConfig) -> Self {
        assert!(step_count > 0, "step script must not be empty");
        let mut player = Self {
            step_count,
            step: 0,
            playing: config.autoplay,
            speed_ms: clamp_speed(config.speed_ms),
            scale: 1.0,
            timer: None,
        };
        player.restart_timer();
        player
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether the repeating timer is live
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Feed elapsed wall time to the timer; returns the number of ticks that
    /// fired. Does nothing while paused.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        timer.elapsed += dt;
        let mut fired = 0u32;
        while timer.elapsed >= timer.period {
            timer.elapsed -= timer.period;
            fired += 1;
        }
        if fired > 0 {
            self.step = (self.step + fired as usize) % self.step_count;
        }
        fired
    }

    /// Flip play/pause. Entering the playing state restarts the timer at the
    /// current speed; pausing cancels it.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        log::debug!("playback {}", if self.playing { "resumed" } else { "paused" });
        self.restart_timer();
    }

    /// Advance one step, wrapping at the end. The timer phase is left alone:
    /// a pending autoplay tick still fires on its original schedule.
    pub fn step_forward(&mut self) {
        self.step = (self.step + 1) % self.step_count;
    }

    /// Go back one step, wrapping at the start. Timer phase untouched.
    pub fn step_back(&mut self) {
        self.step = (self.step + self.step_count - 1) % self.step_count;
    }

    /// Back to the first step without changing the play state
    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// Change the tick period. While playing, the timer restarts at the new
    /// period and any partially elapsed interval is discarded.
    pub fn set_speed(&mut self, speed_ms: u64) {
        self.speed_ms = clamp_speed(speed_ms);
        if self.playing {
            self.restart_timer();
        }
    }

    /// External autoplay override: enter the given play state outright
    pub fn set_autoplay(&mut self, playing: bool) {
        self.playing = playing;
        self.restart_timer();
    }

    /// Recompute the scale factor for a new container width
    pub fn rescale(&mut self, container_w: f32) {
        self.scale = layout::compute_scale(container_w);
    }

    /// Cancel-before-start: any existing timer is dropped, then a fresh one
    /// starts only while playing. Keeps at most one timer live.
    fn restart_timer(&mut self) {
        self.timer = self.playing.then(|| Ticker::new(self.speed_ms));
    }
}

fn clamp_speed(speed_ms: u64) -> u64 {
    speed_ms.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end())
}
