// DOM wiring constants for the browser front-end.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "simCanvas";
pub const MODE_SELECT_ID: &str = "demo-select";
pub const RESET_BUTTON_ID: &str = "btn-reset";
pub const CAPTION_ID: &str = "caption";

// Property installed on `window` for console debugging
pub const DEBUG_API_NAME: &str = "_demo";

// Delay before the first re-measure so CSS layout can settle
pub const RESIZE_SETTLE_MS: i32 = 50;
