// src/components/extent.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Component, ComponentKind};
use crate::geometry::Rectangle;

use super::position::Position;

/// 軸に平行な箱の大きさ (幅と高さ)。位置は `Position` の方が持ってる。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Extent { width, height }
    }

    /// 位置と組み合わせて、ワールド座標の長方形にする。
    pub fn at(&self, position: &Position) -> Rectangle {
        Rectangle::new(position.0.x, position.0.y, self.width, self.height)
    }
}

impl Component for Extent {
    const KIND: ComponentKind = ComponentKind::Rectangle;
}
