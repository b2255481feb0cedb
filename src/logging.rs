// src/logging.rs
//! `log` クレートのマクロ (`info!` とか) の出力先を決めるよ！📝
//!
//! ブラウザでは `console_log` でコンソールへ、ネイティブ (テストとか) では `env_logger` で stderr へ。
//! ネイティブ側は `RUST_LOG` があればそっちが優先。

use log::{Level, SetLoggerError};

/// ロガーを登録する。2回目以降はエラーが返るけど、呼ぶ側は無視してOK。
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    console_log::init_with_level(level)
}

/// ロガーを登録する。2回目以降はエラーが返るけど、呼ぶ側は無視してOK。
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init()
}
