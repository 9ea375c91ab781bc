//! Asset load reporting and the reaction frame manifest.
//!
//! Fetching itself is platform specific and lives in the frontend; it reports
//! through [`LoadReporter`] and hands back a `Result`.

use crate::error::ViewerError;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Model,
    Manifest,
    Image,
}

#[derive(Clone, Debug)]
pub struct AssetInfo {
    pub kind: AssetKind,
    pub url: String,
    pub bytes: usize,
    pub elapsed_ms: f64,
}

/// Bytes received so far. `total` is unknown when the server sends no length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: u64,
    pub total: Option<u64>,
}

impl LoadProgress {
    pub fn percent(&self) -> Option<f64> {
        match self.total {
            Some(0) => Some(100.0),
            Some(total) => Some(self.loaded as f64 / total as f64 * 100.0),
            None => None,
        }
    }
}

pub trait LoadReporter {
    fn progress(&mut self, url: &str, progress: LoadProgress);
    fn loaded(&mut self, info: &AssetInfo);
    fn failed(&mut self, url: &str, error: &ViewerError);
}

/// Reports through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl LoadReporter for LogReporter {
    fn progress(&mut self, url: &str, progress: LoadProgress) {
        match progress.percent() {
            Some(pct) => log::info!("[assets] {} {:.0}% loaded", url, pct),
            None => log::info!("[assets] {} {} bytes loaded", url, progress.loaded),
        }
    }

    fn loaded(&mut self, info: &AssetInfo) {
        log::info!(
            "[assets] {:?} {} ready ({} bytes, {:.1} ms)",
            info.kind,
            info.url,
            info.bytes,
            info.elapsed_ms
        );
    }

    fn failed(&mut self, url: &str, error: &ViewerError) {
        log::error!("[assets] {} failed: {}", url, error);
    }
}

/// One entry of the reaction manifest. Only the name is used; other fields
/// are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ReactionFrame {
    pub name: String,
}

/// Frames listed in the reaction manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReactionFrames {
    pub frames: Vec<ReactionFrame>,
}

impl ReactionFrames {
    /// Accepts either a JSON array of frames (kept in order) or an object whose
    /// values are frames. Object entries follow JavaScript property order:
    /// integer keys ascending, then the remaining keys.
    pub fn from_json(text: &str) -> Result<Self, ViewerError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Layout {
            List(Vec<ReactionFrame>),
            Keyed(serde_json::Map<String, serde_json::Value>),
        }

        let frames = match serde_json::from_str(text).map_err(ViewerError::Manifest)? {
            Layout::List(frames) => frames,
            Layout::Keyed(map) => {
                let mut entries: Vec<_> = map.into_iter().collect();
                // stable: non-integer keys keep the map's order
                entries.sort_by_key(|(key, _)| match array_index(key) {
                    Some(index) => (0, index),
                    None => (1, 0),
                });
                entries
                    .into_iter()
                    .map(|(_, v)| serde_json::from_value(v))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(ViewerError::Manifest)?
            }
        };
        Ok(Self { frames })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Canonical non-negative integer key ("0", "12"; not "01" or "+1").
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}
