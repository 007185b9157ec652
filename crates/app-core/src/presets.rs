//! Static declarations for the three parallax scenes and their music.
//!
//! Layer tables carry the tuned responsiveness levels, displacement
//! ceilings, directions and smoothing constants for every plane, plus
//! shake eligibility and fog breathe factors. The background of each
//! scene scrolls down (+1) while everything in front of it lifts (-1),
//! which sells the depth split.

use crate::layer::{LayerConfig, LayerId};

pub const TRACK_SCENE1: &str = "scene1";
pub const TRACK_SCENE2: &str = "scene2";
pub const TRACK_SCENE3: &str = "scene3";

/// (track id, source path) pairs registered at the gate screen.
pub const GATE_TRACKS: &[(&str, &str)] = &[
    (TRACK_SCENE1, "/audio/music/ST_INTRO.mp3"),
    (TRACK_SCENE2, "/audio/music/vecna.mp3"),
    (TRACK_SCENE3, "/audio/music/Kids.mp3"),
];

/// Additional playlist tracks registered by the main-content player;
/// `scene3` doubles as the first playlist entry.
pub const PLAYLIST_TRACKS: &[(&str, &str)] = &[
    (TRACK_SCENE3, "/audio/music/Kids.mp3"),
    ("track2", "/audio/music/End of Beginning.mp3"),
    ("track3", "/audio/music/Running Up That Hill.mp3"),
    ("track4", "/audio/music/Every Breath You Take.mp3"),
];

/// One full-viewport scene: its layer table, the layer whose activation
/// advances the flow, and the fog sheets that receive the horizontal
/// drift tween. The first fog sheet is drift-only and has no entry in
/// the layer table; sheet order fixes each one's drift period.
#[derive(Clone, Copy, Debug)]
pub struct SceneSpec {
    pub name: &'static str,
    pub layers: &'static [LayerConfig],
    pub activation_layer: LayerId,
    pub fog_layers: &'static [LayerId],
}

const SCENE_ONE_LAYERS: &[LayerConfig] = &[
    LayerConfig::plane("bg", 1, 30.0, 1.0, 2, 30.0, 1.5),
    LayerConfig::plane("bg2", 2, 50.0, -1.0, 2, 50.0, 1.4).with_shake(0.4),
    LayerConfig::plane("college", 4, 90.0, -1.0, 3, 90.0, 1.1).with_shake(0.4),
    LayerConfig::plane("building", 5, 100.0, -1.0, 4, 100.0, 1.2).with_shake(0.4),
    LayerConfig::plane("temple", 5, 120.0, -1.0, 4, 120.0, 1.2).with_shake(0.4),
    LayerConfig::plane("ferris", 4, 80.0, -1.0, 3, 80.0, 1.25).with_shake(0.4),
    LayerConfig::plane("char", 6, 160.0, -1.0, 6, 160.0, 1.5).with_shake(0.4),
    LayerConfig::plane("fg0", 8, 120.0, -1.0, 8, 120.0, 1.0).with_shake(0.4),
    LayerConfig::plane("fg", 9, 80.0, -1.0, 9, 80.0, 0.95).with_shake(0.4),
    LayerConfig::plane("smoke-back", 3, 40.0, -1.0, 2, 40.0, 1.75).with_breathe(0.5),
    LayerConfig::plane("smoke-mid", 5, 60.0, -1.0, 4, 60.0, 1.6).with_breathe(1.0),
    LayerConfig::plane("smoke-front", 7, 100.0, -1.0, 6, 100.0, 1.5).with_breathe(1.5),
];

const SCENE_TWO_LAYERS: &[LayerConfig] = &[
    LayerConfig::plane("bg", 1, 30.0, 1.0, 2, 30.0, 1.5),
    LayerConfig::plane("l0", 2, 100.0, 1.0, 2, 50.0, 1.4).with_shake(0.4),
    LayerConfig::plane("l1", 5, 120.0, 1.0, 4, 100.0, 1.2).with_shake(0.4),
    LayerConfig::plane("l3", 4, 90.0, 1.0, 3, 80.0, 1.25).with_shake(0.4),
    LayerConfig::plane("l4", 5, 80.0, 1.0, 4, 120.0, 1.2).with_shake(0.4),
    LayerConfig::plane("l5", 6, 10.0, 1.0, 8, 200.0, 1.5).with_shake(0.4),
    // declared level 15 clamps to 9 at evaluation time
    LayerConfig::plane("l6", 9, 80.0, -1.0, 15, 320.0, 0.95).with_shake(0.4),
    LayerConfig::plane("smoke-back", 3, 40.0, -1.0, 2, 40.0, 1.75).with_breathe(0.5),
    LayerConfig::plane("smoke-mid", 5, 60.0, -1.0, 4, 60.0, 1.6).with_breathe(1.0),
    LayerConfig::plane("smoke-front", 7, 100.0, -1.0, 6, 100.0, 1.5).with_breathe(1.5),
];

const SCENE_THREE_LAYERS: &[LayerConfig] = &[
    LayerConfig::plane("bg", 1, 30.0, 1.0, 2, 30.0, 1.5),
    LayerConfig::plane("bg2", 2, 50.0, -1.0, 2, 50.0, 1.4).with_shake(0.4),
    LayerConfig::plane("college", 4, 100.0, -1.0, 3, 90.0, 1.1).with_shake(0.4),
    LayerConfig::plane("building", 5, 80.0, -1.0, 4, 100.0, 1.2).with_shake(0.4),
    LayerConfig::plane("temple", 5, 90.0, -1.0, 4, 120.0, 1.2).with_shake(0.4),
    LayerConfig::plane("ferris", 4, 80.0, -1.0, 3, 80.0, 1.25).with_shake(0.4),
    LayerConfig::plane("char", 6, 50.0, -1.0, 6, 160.0, 1.5).with_shake(0.4),
    LayerConfig::plane("fg0", 8, 120.0, -1.0, 8, 120.0, 1.0).with_shake(0.4),
    LayerConfig::plane("fg", 9, 20.0, -1.0, 9, 80.0, 0.95).with_shake(0.4),
    LayerConfig::plane("smoke-back", 3, 40.0, -1.0, 2, 40.0, 1.75).with_breathe(0.5),
    LayerConfig::plane("smoke-mid", 5, 60.0, -1.0, 4, 60.0, 1.6).with_breathe(1.0),
    LayerConfig::plane("smoke-front", 7, 100.0, -1.0, 6, 100.0, 1.5).with_breathe(1.5),
];

const SCENE_FOG: &[LayerId] = &["smoke", "smoke-back", "smoke-mid", "smoke-front"];

pub const SCENE_ONE: SceneSpec = SceneSpec {
    name: "scene-one",
    layers: SCENE_ONE_LAYERS,
    activation_layer: "college",
    fog_layers: SCENE_FOG,
};

pub const SCENE_TWO: SceneSpec = SceneSpec {
    name: "scene-two",
    layers: SCENE_TWO_LAYERS,
    activation_layer: "l5",
    fog_layers: SCENE_FOG,
};

pub const SCENE_THREE: SceneSpec = SceneSpec {
    name: "scene-three",
    layers: SCENE_THREE_LAYERS,
    activation_layer: "college",
    fog_layers: SCENE_FOG,
};
