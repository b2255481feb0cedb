// src/components/position.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Component, ComponentKind};
use crate::geometry::Vector2;

/// 2D空間での位置を表すコンポーネントだよ！📍
///
/// 長方形のプレイヤーなら左上の角、ポリゴンや円なら形状ローカル座標の原点がここに来る。
/// 当たり判定の時は、形状にこの位置を足してワールド座標にするんだ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position(pub Vector2);

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Position(Vector2::new(x, y))
    }
}

impl Component for Position {
    const KIND: ComponentKind = ComponentKind::Position;
}
