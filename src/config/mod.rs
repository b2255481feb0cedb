// src/config/mod.rs
//! ゲームの調整用の値 (速さ、クールダウン、出現位置…) をまとめたモジュールだよ。

pub mod layout;
pub mod tuning;

pub use tuning::{ArenaConfig, ArenaSize, ConfigError, ControlTuning, DashTuning, GroupNames, PlayerSetup, ResetTuning};
