//! Application-level configuration constants.

// Tick cadence
pub const TICK_INTERVAL_MS: u32 = 1_000;

// Display strings
pub const APP_TITLE: &str = "n進数タイマー";
pub const SETTINGS_PROMPT: &str = "各タイマーの進数を設定してください。";
pub const BASE_RANGE_MESSAGE: &str = "2から16の間の数値を入力してください。";
