// src/components/motion.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Component, ComponentKind};
use crate::geometry::Vector2;

/// 速度 (ピクセル/秒)。🏃
///
/// ダッシュ中はこのコンポーネントが外されるよ。だから「速度を持ってる = 自由に動ける」って意味にもなる。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity(pub Vector2);

impl Velocity {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Velocity(Vector2::new(dx, dy))
    }

    pub const fn zero() -> Self {
        Velocity(Vector2::ZERO)
    }
}

impl Component for Velocity {
    const KIND: ComponentKind = ComponentKind::Velocity;
}

/// キー入力で速度を決める時の速さ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Acceleration(pub f32);

impl Component for Acceleration {
    const KIND: ComponentKind = ComponentKind::Acceleration;
}
