// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！
pub mod app; // ループの時計、シーン作り、セッション、JS 向けの窓口
pub mod components; // データだけのコンポーネント
pub mod config; // 調整用の値 (JSON から読める)
pub mod ecs; // 自作 ECS のコア (World, System, Entity)
pub mod geometry; // ベクトルと図形と SAT
pub mod input; // キー入力のスナップショット
pub mod logging; // log クレートの出力先 (console_log / env_logger)
pub mod render; // 描画命令のシンク
pub mod systems; // 毎 tick 動くシステムたち

pub use app::{ArenaApp, ArenaError, ArenaSession};
pub use config::ArenaConfig;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn init_runtime() {
    console_error_panic_hook::set_once();
    // 2回呼ばれてもロガーはそのままでいい
    let _ = logging::init(log::Level::Info);
    log::info!("ecs_wasm_arena: panic hook と logger の準備OK");
}
