//! Top-level view modes selected by the three panel buttons.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Facing-aware 2D structure images.
    #[default]
    TwoD,
    /// Animated reaction path.
    ReactionPath,
    /// Notes on the level of theory behind the calculation.
    About,
}

/// Which of the mutually exclusive panels are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelVisibility {
    pub viewport_image: bool,
    pub viewport_gif: bool,
    pub about: bool,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::TwoD, ViewMode::ReactionPath, ViewMode::About];

    pub fn panels(self) -> PanelVisibility {
        PanelVisibility {
            viewport_image: self == ViewMode::TwoD,
            viewport_gif: self == ViewMode::ReactionPath,
            about: self == ViewMode::About,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ViewMode::TwoD => {
                "The 2D representation to the right changes both when you rotate the 3D model, \
                 and when moving back and forth between the ground state, the transition state, \
                 and the product."
            }
            ViewMode::ReactionPath => {
                "The geometry changes for the 3D model as the intrinsic reaction coordinate \
                 progresses."
            }
            ViewMode::About => {
                "The brief description about the level of theory implemented in the \
                 calculation that led to the 3D model seen here."
            }
        }
    }
}
