// DOM hooks used by the web frontend.

// Page structure
pub const CONTAINER_SELECTOR: &str = ".whip-3d-container";
pub const CANVAS_ID: &str = "whip-canvas";
pub const HINT_ID: &str = "whip-hint";
pub const HINT_CLASS: &str = "whip-hint";
pub const HINT_TEXT: &str = "Release to let go";
pub const ARIA_LABEL: &str = "Hold and drag to whip";

// Class present while the whip is expanded to fill the viewport
pub const WHIPPING_CLASS: &str = "whipping";

