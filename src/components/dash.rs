// src/components/dash.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Component, ComponentKind};
use crate::geometry::Vector2;

/// ダッシュ中の状態だよ！💨
///
/// ダッシュ中は `Velocity` が外されて、代わりに `DashSystem` がこの情報で位置を動かす。
/// `remaining` が尽きたら `DashSystem` がこれを外して、止まった `Velocity` を戻すよ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dash {
    /// 進む向き (上なら (0, -1)、右なら (1, 0))。
    pub direction: Vector2,
    /// ダッシュ全体の長さ (秒)。
    pub duration: f32,
    /// 残り時間 (秒)。
    pub remaining: f32,
    /// 始まってからの経過時間 (秒)。スコアの同着判定にも使う。
    pub elapsed: f32,
}

impl Dash {
    pub fn new(duration: f32, direction: Vector2) -> Self {
        Dash {
            direction,
            duration,
            remaining: duration,
            elapsed: 0.0,
        }
    }
}

impl Component for Dash {
    const KIND: ComponentKind = ComponentKind::Dash;
}
