//! Progress slider → lifecycle stage → overlay image.

use crate::constants::{GROUND_STATE_MAX, PROGRESS_MAX, TRANSITION_STATE_MAX};
use crate::error::ViewerError;
use crate::images::ImageSet;
use std::fmt;

/// Position of the reaction slider, always within `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Progress(u8);

impl Progress {
    pub fn new(value: u8) -> Result<Self, ViewerError> {
        if value > PROGRESS_MAX {
            return Err(ViewerError::InvalidProgress(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Clamp any integer into range; slider input goes through here.
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(0, PROGRESS_MAX as i64) as u8)
    }

    /// Parse the string value an `<input type="range">` reports.
    pub fn parse(raw: &str) -> Result<Self, ViewerError> {
        let value: u8 = raw
            .trim()
            .parse()
            .map_err(|_| ViewerError::InvalidProgress(raw.to_string()))?;
        Self::new(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn fraction(self) -> f32 {
        self.0 as f32 / PROGRESS_MAX as f32
    }

    /// Playhead into a reaction animation of `duration` seconds.
    pub fn animation_time(self, duration: f32) -> f32 {
        duration * self.fraction()
    }

    pub fn stage(self) -> LifecycleStage {
        LifecycleStage::from_progress(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleStage {
    GroundState,
    TransitionState,
    Product,
}

impl LifecycleStage {
    /// `[0,33]` ground state, `(33,66]` transition state, `(66,100]` product.
    pub fn from_progress(progress: Progress) -> Self {
        match progress.value() {
            v if v <= GROUND_STATE_MAX => LifecycleStage::GroundState,
            v if v <= TRANSITION_STATE_MAX => LifecycleStage::TransitionState,
            _ => LifecycleStage::Product,
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            LifecycleStage::GroundState => "ground state",
            LifecycleStage::TransitionState => "transition state",
            LifecycleStage::Product => "product",
        }
    }

    pub fn pick(self, set: &ImageSet) -> &str {
        match self {
            LifecycleStage::GroundState => &set.ground_state,
            LifecycleStage::TransitionState => &set.transition_state,
            LifecycleStage::Product => &set.product,
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.caption())
    }
}

/// Where the overlay image ends up. The web frontend backs this with the
/// `<img>` element and the caption span.
pub trait OverlaySink {
    fn displayed_source(&self) -> Option<String>;
    fn set_source(&mut self, src: &str);
    fn set_caption(&mut self, caption: &str);
}

/// Point the overlay at the image for `progress` within `active`.
///
/// Returns the stage when the overlay was rewritten, `None` when it already
/// showed the right image.
pub fn sync_overlay<O: OverlaySink + ?Sized>(
    progress: Progress,
    active: &ImageSet,
    overlay: &mut O,
) -> Option<LifecycleStage> {
    let stage = progress.stage();
    let wanted = stage.pick(active);
    if overlay.displayed_source().as_deref() == Some(wanted) {
        return None;
    }
    overlay.set_source(wanted);
    overlay.set_caption(stage.caption());
    Some(stage)
}
