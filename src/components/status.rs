// src/components/status.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Component, ComponentKind};

/// 無敵状態のマーカー。🛡️ 持ってる間はダッシュで当てられても点を取られない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Invulnerable;

impl Component for Invulnerable {
    const KIND: ComponentKind = ComponentKind::Invulnerable;
}

/// 得点と、このラウンドで無敵だった合計時間。🏆
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    pub points: u32,
    pub time_invulnerable: f32,
}

impl Component for Score {
    const KIND: ComponentKind = ComponentKind::Score;
}
