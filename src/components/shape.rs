// src/components/shape.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Component, ComponentKind};
use crate::geometry::{Circle, Polygon, Vector2};

/// 当たり判定用の形。形状ローカル座標で持って、判定の時に `Position` を足すよ。🔷⚪
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Poly(Polygon),
    Circle(Circle),
}

/// 形の種類だけ。衝突検出で「どの組み合わせの判定を使うか」を決めるのに使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Poly,
    Circle,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Poly(_) => ShapeKind::Poly,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// ワールド座標に置いた形。
    pub fn translated(&self, offset: Vector2) -> Shape {
        match self {
            Shape::Poly(polygon) => Shape::Poly(polygon.translated(offset)),
            Shape::Circle(circle) => Shape::Circle(circle.translated(offset)),
        }
    }
}

impl Component for Shape {
    const KIND: ComponentKind = ComponentKind::Shape;
}
