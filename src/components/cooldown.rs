// src/components/cooldown.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Component, ComponentKind};

/// ジャンプとダッシュのクールダウン残り時間 (秒)。⏳ 0 以下なら使えるよ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cooldown {
    pub jump: f32,
    pub dash: f32,
}

impl Cooldown {
    pub const fn new(jump: f32, dash: f32) -> Self {
        Cooldown { jump, dash }
    }

    pub fn can_jump(&self) -> bool {
        self.jump <= 0.0
    }

    pub fn can_dash(&self) -> bool {
        self.dash <= 0.0
    }
}

impl Component for Cooldown {
    const KIND: ComponentKind = ComponentKind::Cooldown;
}
