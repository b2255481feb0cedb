// src/components/collision.rs

use serde::{Deserialize, Serialize};

use crate::ecs::entity::Entity;
use crate::geometry::Vector2;

/// 衝突イベント。💥
///
/// 衝突検出システムが作って World のキューに積んで、同じ tick のうちに
/// 衝突解決システムが全部消費する。エンティティにはしないよ (IDがもったいないからね)。
///
/// `vector` は `subject` の位置にそのまま足せば `other` から離れる移動量。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub subject: Entity,
    pub other: Entity,
    pub vector: Vector2,
}
