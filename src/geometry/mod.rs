// src/geometry/mod.rs
//! 2D の幾何プリミティブと、SAT (分離軸定理) による当たり判定。

pub mod sat;
pub mod shapes;
pub mod vector;

pub use shapes::{Circle, Polygon, Rectangle};
pub use vector::Vector2;
