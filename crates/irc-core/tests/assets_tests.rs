// Host-side tests for asset reporting, the reaction manifest and page configuration.

use irc_core::*;

#[test]
fn load_percent() {
    let half = LoadProgress {
        loaded: 50,
        total: Some(200),
    };
    assert_eq!(half.percent(), Some(25.0));
    let unknown = LoadProgress {
        loaded: 50,
        total: None,
    };
    assert_eq!(unknown.percent(), None);
    let empty = LoadProgress {
        loaded: 0,
        total: Some(0),
    };
    assert_eq!(empty.percent(), Some(100.0));
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl LoadReporter for Recorder {
    fn progress(&mut self, url: &str, progress: LoadProgress) {
        self.events.push(format!("progress {url} {}", progress.loaded));
    }
    fn loaded(&mut self, info: &AssetInfo) {
        self.events.push(format!("loaded {} {}", info.url, info.bytes));
    }
    fn failed(&mut self, url: &str, error: &ViewerError) {
        self.events.push(format!("failed {url} {error}"));
    }
}

#[test]
fn reporters_are_object_safe() {
    let mut recorder = Recorder::default();
    let reporter: &mut dyn LoadReporter = &mut recorder;
    reporter.progress(
        "a.fbx",
        LoadProgress {
            loaded: 3,
            total: None,
        },
    );
    reporter.loaded(&AssetInfo {
        kind: AssetKind::Model,
        url: "a.fbx".into(),
        bytes: 3,
        elapsed_ms: 1.0,
    });
    reporter.failed(
        "b.json",
        &ViewerError::AssetStatus {
            url: "b.json".into(),
            status: 404,
        },
    );
    assert_eq!(recorder.events.len(), 3);
    assert_eq!(recorder.events[1], "loaded a.fbx 3");
    assert!(recorder.events[2].contains("404"));

    // the logging reporter accepts the same calls
    let mut logger = LogReporter;
    logger.progress(
        "a.fbx",
        LoadProgress {
            loaded: 1,
            total: Some(2),
        },
    );
}

#[test]
fn manifest_as_a_list_keeps_order() {
    let frames = ReactionFrames::from_json(
        r#"[{"name": "gs"}, {"name": "ts", "energy": -1.5}, {"name": "pr"}]"#,
    )
    .unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames.names().collect::<Vec<_>>(), ["gs", "ts", "pr"]);
}

#[test]
fn manifest_as_an_object_is_ordered_by_key() {
    let frames = ReactionFrames::from_json(
        r#"{"2": {"name": "product"}, "0": {"name": "reactant"}, "1": {"name": "ts"}}"#,
    )
    .unwrap();
    assert_eq!(
        frames.names().collect::<Vec<_>>(),
        ["reactant", "ts", "product"]
    );
}

#[test]
fn manifest_integer_keys_sort_numerically() {
    let frames = ReactionFrames::from_json(
        r#"{"0": {"name": "a"}, "2": {"name": "b"}, "10": {"name": "c"}}"#,
    )
    .unwrap();
    assert_eq!(frames.names().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn manifest_named_keys_follow_integer_keys() {
    let frames = ReactionFrames::from_json(
        r#"{"extra": {"name": "x"}, "10": {"name": "c"}, "01": {"name": "z"}, "9": {"name": "b"}}"#,
    )
    .unwrap();
    let names: Vec<_> = frames.names().collect();
    assert_eq!(&names[..2], ["b", "c"]);
    assert_eq!(names.len(), 4);
    assert!(names[2..].contains(&"x") && names[2..].contains(&"z"));
}

#[test]
fn empty_manifest() {
    let frames = ReactionFrames::from_json("[]").unwrap();
    assert!(frames.is_empty());
    assert_eq!(frames, ReactionFrames::default());
}

#[test]
fn malformed_manifest_is_an_error() {
    assert!(matches!(
        ReactionFrames::from_json("{not json"),
        Err(ViewerError::Manifest(_))
    ));
    assert!(matches!(
        ReactionFrames::from_json(r#"[{"label": "missing name"}]"#),
        Err(ViewerError::Manifest(_))
    ));
    assert!(matches!(
        ReactionFrames::from_json(r#"{"a": {"label": "missing name"}}"#),
        Err(ViewerError::Manifest(_))
    ));
    assert!(ReactionFrames::from_json("42").is_err());
}

#[test]
fn config_defaults() {
    let config = ViewerConfig::default();
    assert_eq!(config.anchor_distance, 10.0);
    assert_eq!(config.anchor_cube_size, 10.0);
    assert_eq!(config.camera_offset, 2.0);
    assert_eq!(config.viewport_scale, 0.5);
    assert_eq!(config.image_base, "/public/templates");
    assert_eq!(config.initial_progress, 50);
    assert_eq!(config.initial_facing, Facing::Right);
    assert!(!config.show_anchors);
    assert!(config.show_reference_lines);
    assert_eq!(ViewerConfig::from_json("{}").unwrap(), config);
}

#[test]
fn config_partial_override() {
    let config = ViewerConfig::from_json(
        r#"{"image_base": "/cdn/eb01", "anchor_distance": 12.5, "animation_duration": 4.0}"#,
    )
    .unwrap();
    assert_eq!(config.image_base, "/cdn/eb01");
    assert_eq!(config.anchor_distance, 12.5);
    assert_eq!(config.animation_duration, Some(4.0));
    assert_eq!(config.anchor_cube_size, ANCHOR_CUBE_SIZE);
    assert_eq!(config.model_path, DEFAULT_MODEL_PATH);
}

#[test]
fn invalid_config_is_an_error() {
    assert!(matches!(
        ViewerConfig::from_json(r#"{"anchor_distance": "far"}"#),
        Err(ViewerError::Config(_))
    ));
    assert!(matches!(
        ViewerConfig::from_json(r#"{"initial_progress": 300}"#),
        Err(ViewerError::Config(_))
    ));
}

#[test]
fn view_modes_show_one_panel_each() {
    assert_eq!(ViewMode::default(), ViewMode::TwoD);
    for mode in ViewMode::ALL {
        let panels = mode.panels();
        let shown = [panels.viewport_image, panels.viewport_gif, panels.about]
            .iter()
            .filter(|&&p| p)
            .count();
        assert_eq!(shown, 1, "{mode:?}");
        assert!(!mode.description().is_empty());
    }
}
