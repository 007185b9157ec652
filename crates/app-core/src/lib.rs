pub mod constants;
pub mod depth;
pub mod flow;
pub mod input;
pub mod layer;
pub mod music;
pub mod presets;
pub mod scene;
pub mod shake;
pub mod ticker;
pub mod tracker;

pub use constants::*;
pub use depth::{pointer_value, scroll_value, POINTER_RESPONSE_SCALE};
pub use flow::{Phase, SceneFlow};
pub use input::{pointer_axis_norm, scroll_fraction, InputSample};
pub use layer::{LayerConfig, LayerId};
pub use music::{AudioSink, MusicDirectory, MusicError, PlaybackState, TrackState};
pub use presets::{SceneSpec, GATE_TRACKS, PLAYLIST_TRACKS, SCENE_ONE, SCENE_THREE, SCENE_TWO};
pub use scene::{fog_drift_percent, SceneAnimator, TransformSink};
pub use shake::ShakeBroadcaster;
pub use ticker::{CallbackId, Ticker};
pub use tracker::{AxisPair, SmoothedAxis};
