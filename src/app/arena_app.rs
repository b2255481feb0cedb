// src/app/arena_app.rs

// JS から触る窓口だよ！🪟
// 中身は全部 ArenaSession に任せて、ここはエラーを JsValue に変えるだけ。

use log::error;
use wasm_bindgen::prelude::*;

use crate::app::session::{ArenaError, ArenaSession};
use crate::config::ArenaConfig;

fn to_js_error(err: ArenaError) -> JsValue {
    error!("ArenaApp: {}", err);
    JsValue::from_str(&err.to_string())
}

fn load_config(config_json: Option<String>) -> Result<ArenaConfig, ArenaError> {
    match config_json {
        Some(json) if !json.trim().is_empty() => Ok(ArenaConfig::from_json(&json)?),
        _ => Ok(ArenaConfig::default()),
    }
}

#[wasm_bindgen]
pub struct ArenaApp {
    session: ArenaSession,
}

#[wasm_bindgen]
impl ArenaApp {
    /// 対戦モードで作る。`config_json` を省略するとデフォルト設定。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ArenaApp, JsValue> {
        let config = load_config(config_json).map_err(to_js_error)?;
        let session = ArenaSession::duel(config).map_err(to_js_error)?;
        Ok(ArenaApp { session })
    }

    /// サンドボックスモードで作る。
    pub fn sandbox(config_json: Option<String>) -> Result<ArenaApp, JsValue> {
        let config = load_config(config_json).map_err(to_js_error)?;
        let session = ArenaSession::sandbox(config).map_err(to_js_error)?;
        Ok(ArenaApp { session })
    }

    pub fn key_down(&mut self, key_code: u32, timestamp_ms: f64) {
        self.session.key_down(key_code, timestamp_ms);
    }

    pub fn key_up(&mut self, key_code: u32) {
        self.session.key_up(key_code);
    }

    pub fn start(&mut self, now_ms: f64) {
        self.session.start(now_ms);
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// `requestAnimationFrame` のコールバックから呼んでね。1 tick 進んだら `true`。
    pub fn tick(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        self.session.tick(now_ms).map_err(to_js_error)
    }

    /// 最新フレームの描画命令 (JSON 配列)。
    pub fn draw_list_json(&self) -> Result<String, JsValue> {
        self.session.draw_list_json().map_err(to_js_error)
    }

    /// スコア表 (JSON)。
    pub fn scores_json(&self) -> Result<String, JsValue> {
        self.session.scores_json().map_err(to_js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_missing_config_means_defaults() {
        assert_eq!(load_config(None).unwrap(), ArenaConfig::default());
        assert_eq!(load_config(Some("  ".to_string())).unwrap(), ArenaConfig::default());
        assert_eq!(load_config(Some(r#"{"gravity": 10.0}"#.to_string())).unwrap().gravity, 10.0);
        assert!(matches!(load_config(Some("{".to_string())), Err(ArenaError::Config(_))));
    }
}
