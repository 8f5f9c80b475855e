// Presentation helpers shared across components.

use crate::model::{LevelStatus, LevelSymbol};
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Resolve a symbol identifier to the glyph the UI draws for it.
pub fn symbol_glyph(symbol: LevelSymbol) -> &'static str {
    match symbol {
        LevelSymbol::Candy => "🍬",
        LevelSymbol::Heart => "💖",
        LevelSymbol::Zap => "⚡",
        LevelSymbol::Sparkles => "✨",
        LevelSymbol::Crown => "👑",
        LevelSymbol::Gift => "🎁",
        LevelSymbol::Trophy => "🏆",
        LevelSymbol::Gamepad => "🎮",
        LevelSymbol::Lock => "🔒",
        LevelSymbol::Star => "⭐",
    }
}

/// Node fill color per status.
pub fn status_bg(status: LevelStatus) -> &'static str {
    match status {
        LevelStatus::Locked => "#8b949e",
        LevelStatus::Available => "#58a6ff",
        LevelStatus::Completed => "#3fb950",
    }
}
