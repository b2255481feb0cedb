// src/config/tuning.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::layout::*;
use crate::geometry::Vector2;
use crate::input::KeyCode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse arena config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid arena config: {0}")]
    Invalid(String),
}

/// アリーナの大きさ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaSize {
    fn default() -> Self {
        ArenaSize {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// 操作まわりの調整値。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlTuning {
    pub move_speed: f32,
    pub ground_speed_bonus: f32,
    pub jump_speed: f32,
    pub jump_cooldown: f32,
    pub dash_cooldown: f32,
    pub double_tap_gap_ms: f64,
    pub double_tap_max_age_ms: f64,
    pub invulnerable_alpha: f32,
}

impl Default for ControlTuning {
    fn default() -> Self {
        ControlTuning {
            move_speed: MOVE_SPEED,
            ground_speed_bonus: GROUND_SPEED_BONUS,
            jump_speed: JUMP_SPEED,
            jump_cooldown: JUMP_COOLDOWN,
            dash_cooldown: DASH_COOLDOWN,
            double_tap_gap_ms: DOUBLE_TAP_GAP_MS,
            double_tap_max_age_ms: DOUBLE_TAP_MAX_AGE_MS,
            invulnerable_alpha: INVULNERABLE_ALPHA,
        }
    }
}

/// ダッシュの長さと速さの変化 (開始 → 終了を線形補間)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashTuning {
    pub duration: f32,
    pub start_speed: f32,
    pub end_speed: f32,
}

impl Default for DashTuning {
    fn default() -> Self {
        DashTuning {
            duration: DASH_DURATION,
            start_speed: DASH_START_SPEED,
            end_speed: DASH_END_SPEED,
        }
    }
}

/// ラウンドリセットの時に入れ直す値。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetTuning {
    pub jump_cooldown: f32,
    pub dash_cooldown: f32,
}

impl Default for ResetTuning {
    fn default() -> Self {
        ResetTuning {
            jump_cooldown: RESET_COOLDOWN,
            dash_cooldown: RESET_COOLDOWN,
        }
    }
}

/// プレイヤー1人分の設定: タグ、キー割り当て、出現位置、画像。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub tag: String,
    pub up: KeyCode,
    pub left: KeyCode,
    pub down: KeyCode,
    pub right: KeyCode,
    pub spawn: Vector2,
    pub image_id: u32,
}

impl PlayerSetup {
    pub fn player1() -> Self {
        PlayerSetup {
            tag: PLAYER1_TAG.to_string(),
            up: KeyCode::W,
            left: KeyCode::A,
            down: KeyCode::S,
            right: KeyCode::D,
            spawn: Vector2::new(PLAYER1_SPAWN_X, PLAYER1_SPAWN_Y),
            image_id: 1,
        }
    }

    pub fn player2() -> Self {
        PlayerSetup {
            tag: PLAYER2_TAG.to_string(),
            up: KeyCode::Up,
            left: KeyCode::Left,
            down: KeyCode::Down,
            right: KeyCode::Right,
            spawn: Vector2::new(PLAYER2_SPAWN_X, PLAYER2_SPAWN_Y),
            image_id: 1,
        }
    }
}

/// グループ名。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupNames {
    pub players: String,
    pub collision_bodies: String,
}

impl Default for GroupNames {
    fn default() -> Self {
        GroupNames {
            players: PLAYERS_GROUP.to_string(),
            collision_bodies: COLLISION_BODIES_GROUP.to_string(),
        }
    }
}

/// ゲーム全体の調整値だよ！⚙️
///
/// システムの中に数字を直書きしないで、全部ここから渡すのがルール。
/// JSON から読むこともできて、書かなかった項目はデフォルト値になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub arena: ArenaSize,
    pub player_width: f32,
    pub player_height: f32,
    pub control: ControlTuning,
    pub dash: DashTuning,
    /// 重力加速度 (px/s^2)。プラスが下向き。
    pub gravity: f32,
    pub reset: ResetTuning,
    pub player1: PlayerSetup,
    pub player2: PlayerSetup,
    pub groups: GroupNames,
    pub sandbox_acceleration: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            arena: ArenaSize::default(),
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            control: ControlTuning::default(),
            dash: DashTuning::default(),
            gravity: GRAVITY,
            reset: ResetTuning::default(),
            player1: PlayerSetup::player1(),
            player2: PlayerSetup::player2(),
            groups: GroupNames::default(),
            sandbox_acceleration: SANDBOX_ACCELERATION,
        }
    }
}

impl ArenaConfig {
    /// JSON から読んで、値がおかしくないかチェックまでする。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena.width > 0.0 && self.arena.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arena size must be positive, got {}x{}",
                self.arena.width, self.arena.height
            )));
        }
        if !(self.player_width > 0.0 && self.player_height > 0.0) {
            return Err(ConfigError::Invalid("player size must be positive".to_string()));
        }
        if !(self.dash.duration > 0.0) {
            return Err(ConfigError::Invalid(format!("dash duration must be positive, got {}", self.dash.duration)));
        }
        if self.dash.start_speed < 0.0 || self.dash.end_speed < 0.0 {
            return Err(ConfigError::Invalid("dash speeds must not be negative".to_string()));
        }
        if self.control.jump_cooldown < 0.0 || self.control.dash_cooldown < 0.0 {
            return Err(ConfigError::Invalid("cooldowns must not be negative".to_string()));
        }
        if !(0.0..=1.0).contains(&self.control.invulnerable_alpha) {
            return Err(ConfigError::Invalid("invulnerable alpha must be within 0..=1".to_string()));
        }
        if self.player1.tag == self.player2.tag {
            return Err(ConfigError::Invalid(format!("both players use the tag '{}'", self.player1.tag)));
        }
        Ok(())
    }
}
