/// Page contract and frame-loop tuning for the web frontend.
///
/// The page provides one positioned container; markers are appended to it as
/// absolutely positioned children carrying `MARKER_CLASS`.
pub const CONTAINER_ID: &str = "grid-container";
pub const MARKER_CLASS: &str = "dot";

// Fired once the page has parsed; init waits for it when loaded early
pub const DOM_READY_EVENT: &str = "DOMContentLoaded";

// Largest frame delta fed to the animator (seconds). Backgrounded tabs stop
// animation frames, and the first frame after return would otherwise replay
// everything that was missed.
pub const MAX_FRAME_DT_SEC: f32 = 0.25;

// Decimal places written for opacity and scale
pub const STYLE_DECIMALS: usize = 3;
