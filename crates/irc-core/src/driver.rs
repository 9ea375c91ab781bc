//! Per-frame simulation step.
//!
//! The host calls [`Viewer::step`] once per animation frame and forwards slider
//! and button input to [`Viewer::set_progress`] / [`Viewer::select_mode`]. All of
//! it runs synchronously on the single UI thread.

use crate::camera::{Camera, OrbitController};
use crate::config::ViewerConfig;
use crate::constants::DEFAULT_PROGRESS;
use crate::facing::{classify, AnchorSet, Facing};
use crate::images::{ActiveImages, ImageSet, ImageTable};
use crate::mode::ViewMode;
use crate::progress::{sync_overlay, LifecycleStage, OverlaySink, Progress};
use glam::Vec3;

/// Everything the renderer needs for one frame.
pub struct FrameView<'a> {
    pub camera: &'a Camera,
    pub anchors: &'a AnchorSet,
    pub show_reference_lines: bool,
}

pub trait FrameRenderer {
    fn render(&mut self, frame: &FrameView<'_>);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Facing of the nearest anchor hit this frame, if any.
    pub classified: Option<Facing>,
    pub facing_changed: bool,
    /// Set when the overlay image was rewritten.
    pub stage_shown: Option<LifecycleStage>,
}

pub struct Viewer {
    anchors: AnchorSet,
    table: ImageTable,
    images: ActiveImages,
    progress: Progress,
    orbit: OrbitController,
    mode: ViewMode,
    show_reference_lines: bool,
    animation_duration: Option<f32>,
}

impl Viewer {
    pub fn new(config: &ViewerConfig, aspect: f32) -> Self {
        let mut anchors = AnchorSet::cardinal(config.anchor_distance, config.anchor_cube_size);
        anchors.visible = config.show_anchors;
        let table = ImageTable::from_base(&config.image_base);
        let eye = Vec3::new(0.0, 0.0, config.anchor_distance - config.camera_offset);
        let orbit = OrbitController::new(Camera::looking_at(eye, Vec3::ZERO, aspect));
        Self::from_parts(config, anchors, table, orbit)
    }

    /// Assemble a viewer from prebuilt pieces; the remaining settings come from `config`.
    pub fn from_parts(
        config: &ViewerConfig,
        anchors: AnchorSet,
        table: ImageTable,
        orbit: OrbitController,
    ) -> Self {
        Self {
            images: ActiveImages::new(config.initial_facing, &table),
            anchors,
            table,
            progress: Progress::saturating(config.initial_progress as i64),
            orbit,
            mode: ViewMode::default(),
            show_reference_lines: config.show_reference_lines,
            animation_duration: config.animation_duration,
        }
    }

    pub fn current_facing(&self) -> Facing {
        self.images.current_facing()
    }

    pub fn active_images(&self) -> &ImageSet {
        self.images.active()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    pub fn camera(&self) -> &Camera {
        self.orbit.camera()
    }

    pub fn orbit_mut(&mut self) -> &mut OrbitController {
        &mut self.orbit
    }

    pub fn set_animation_duration(&mut self, duration: Option<f32>) {
        self.animation_duration = duration;
    }

    /// Playhead into the reaction animation for the current progress.
    pub fn animation_time(&self) -> Option<f32> {
        self.animation_duration.map(|d| self.progress.animation_time(d))
    }

    /// Show the image matching the current progress and facing.
    pub fn refresh_overlay<O: OverlaySink + ?Sized>(
        &self,
        overlay: &mut O,
    ) -> Option<LifecycleStage> {
        sync_overlay(self.progress, self.images.active(), overlay)
    }

    /// Classify the camera, update images on a facing change, then draw.
    pub fn step<O, R>(&mut self, overlay: &mut O, renderer: &mut R) -> StepOutcome
    where
        O: OverlaySink + ?Sized,
        R: FrameRenderer + ?Sized,
    {
        let mut outcome = StepOutcome::default();
        let camera = self.orbit.camera();
        outcome.classified = classify(&self.anchors, camera.eye, camera.world_direction());

        if let Some(facing) = outcome.classified {
            if facing != self.images.current_facing() {
                outcome.facing_changed = self.images.set_facing(facing, &self.table);
            }
            if outcome.facing_changed {
                log::debug!("[facing] now {}", facing);
                outcome.stage_shown = self.refresh_overlay(overlay);
            }
        }

        renderer.render(&FrameView {
            camera: self.orbit.camera(),
            anchors: &self.anchors,
            show_reference_lines: self.show_reference_lines,
        });
        outcome
    }

    /// Slider input.
    pub fn set_progress<O: OverlaySink + ?Sized>(
        &mut self,
        progress: Progress,
        overlay: &mut O,
    ) -> Option<LifecycleStage> {
        self.progress = progress;
        self.refresh_overlay(overlay)
    }

    /// Panel button: switch mode, reset the camera and put the slider back at
    /// the midpoint, whatever progress the page started from.
    pub fn select_mode<O: OverlaySink + ?Sized>(&mut self, mode: ViewMode, overlay: &mut O) {
        self.mode = mode;
        self.orbit.reset();
        self.set_progress(Progress::saturating(DEFAULT_PROGRESS as i64), overlay);
    }
}
