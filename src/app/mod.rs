// src/app/mod.rs
//! ゲームを動かす外側の部分だよ！ 時計、シーン作り、セッション、それと JS 向けの窓口。

pub mod arena_app;
pub mod engine;
pub mod session;
pub mod setup;

pub use arena_app::ArenaApp;
pub use engine::Engine;
pub use session::{ArenaError, ArenaSession, SceneMode};
