// src/config/layout.rs
//! アリーナの大きさやプレイヤーの初期値などのデフォルト定数だよ！
//! 実際に使う値は `ArenaConfig` 経由で上書きできる。

pub const ARENA_WIDTH: f32 = 800.0; // アリーナの幅
pub const ARENA_HEIGHT: f32 = 400.0; // アリーナの高さ (床の y 座標)

pub const PLAYER_WIDTH: f32 = 50.0; // プレイヤーの箱の幅
pub const PLAYER_HEIGHT: f32 = 50.0; // プレイヤーの箱の高さ

pub const PLAYER1_SPAWN_X: f32 = 100.0; // プレイヤー1の出現位置
pub const PLAYER1_SPAWN_Y: f32 = 100.0;
pub const PLAYER2_SPAWN_X: f32 = 650.0; // プレイヤー2の出現位置
pub const PLAYER2_SPAWN_Y: f32 = 100.0;

pub const MOVE_SPEED: f32 = 80.0; // 横移動の速さ (px/s)
pub const GROUND_SPEED_BONUS: f32 = 40.0; // 床に立ってる時の横移動ボーナス (px/s)
pub const JUMP_SPEED: f32 = 250.0; // ジャンプの初速 (px/s, 上向き)
pub const JUMP_COOLDOWN: f32 = 0.8; // 秒
pub const DASH_COOLDOWN: f32 = 0.8; // 秒
pub const DOUBLE_TAP_GAP_MS: f64 = 400.0; // ダブルタップの2回の間隔の上限
pub const DOUBLE_TAP_MAX_AGE_MS: f64 = 400.0; // 2回目のタップからの経過時間の上限

pub const DASH_DURATION: f32 = 0.4; // 秒
pub const DASH_START_SPEED: f32 = 900.0; // ダッシュ開始時の速さ (px/s)
pub const DASH_END_SPEED: f32 = 300.0; // ダッシュ終了時の速さ (px/s)

pub const GRAVITY: f32 = 600.0; // 重力加速度 (px/s^2, 下向き)

pub const RESET_COOLDOWN: f32 = 1.0; // ラウンドリセット後のクールダウン (秒)
pub const INVULNERABLE_ALPHA: f32 = 0.5; // 無敵中の透明度

pub const SANDBOX_ACCELERATION: f32 = 60.0; // サンドボックスのプレイヤーの速さ (px/s)

pub const PLAYER1_TAG: &str = "PLAYER1";
pub const PLAYER2_TAG: &str = "PLAYER2";
pub const SANDBOX_PLAYER_TAG: &str = "PLAYER";
pub const PLAYERS_GROUP: &str = "PLAYERS";
pub const COLLISION_BODIES_GROUP: &str = "COLLISION_BODIES";
