// src/geometry/vector.rs
//! 2D ベクトルは `glam::Vec2` をそのまま使うよ！🧭
//!
//! 位置にも速度にも、SAT の軸にも使う万能選手。画面座標と同じで、y は下向きがプラス。
//! JSON では `[x, y]` の配列になる (glam の serde 表現)。

pub use glam::Vec2 as Vector2;
