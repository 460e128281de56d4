//! Index-addressed playback over a materialised frame sequence.
//!
//! The controller never touches the frames themselves: it only moves a cursor.
//! Loading a new sequence replaces the old one and restarts from frame 0.

use std::{sync::Arc, time::Duration};

use crate::{
    config::{check_speed, PlaybackConfig},
    frame::Frame,
    Result,
};

const MIN_DELAY_MS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Playback {
    frames: Arc<[Frame]>,
    cursor: usize,
    playing: bool,
    speed: u32,
    pending: Duration,
}

impl Playback {
    pub fn new(frames: impl Into<Arc<[Frame]>>) -> Self {
        Self {
            frames: frames.into(),
            cursor: 0,
            playing: false,
            speed: PlaybackConfig::default().speed,
            pending: Duration::ZERO,
        }
    }

    pub fn with_speed(frames: impl Into<Arc<[Frame]>>, speed: u32) -> Result<Self> {
        let mut playback = Self::new(frames);
        playback.set_speed(speed)?;
        Ok(playback)
    }

    /// Replaces the sequence. Any in-flight playback restarts from frame 0.
    pub fn load(&mut self, frames: impl Into<Arc<[Frame]>>) {
        self.frames = frames.into();
        self.reset();
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn current(&self) -> Option<&Frame> {
        self.frames.get(self.cursor)
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.cursor + 1 >= self.frames.len()
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u32) -> Result<()> {
        check_speed(speed)?;
        self.speed = speed;
        Ok(())
    }

    /// Delay between frames: 500ms at speed 1 down to 10ms at speed 100.
    pub fn frame_delay(&self) -> Duration {
        let millis = 510_u64.saturating_sub(u64::from(self.speed) * 5);
        Duration::from_millis(millis.max(MIN_DELAY_MS))
    }

    pub fn play(&mut self) {
        if !self.is_finished() {
            self.playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.pending = Duration::ZERO;
    }

    pub fn reset(&mut self) {
        self.pause();
        self.cursor = 0;
    }

    /// Jumps to `index`, clamped to the last frame. Pauses playback.
    pub fn seek(&mut self, index: usize) -> usize {
        self.pause();
        self.cursor = index.min(self.frames.len().saturating_sub(1));
        self.cursor
    }

    pub fn step_forward(&mut self) -> bool {
        self.pause();
        if self.is_finished() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn step_back(&mut self) -> bool {
        self.pause();
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Advances by as many frames as `elapsed` covers and returns how many were
    /// consumed. Playback stops on the terminal frame.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        if !self.playing {
            return 0;
        }

        self.pending += elapsed;
        let delay = self.frame_delay();
        let mut advanced = 0;

        while self.pending >= delay && !self.is_finished() {
            self.pending -= delay;
            self.cursor += 1;
            advanced += 1;
        }

        if self.is_finished() {
            self.pause();
        }

        advanced
    }
}
