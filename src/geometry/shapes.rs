// src/geometry/shapes.rs

use serde::{Deserialize, Serialize};

use crate::geometry::vector::Vector2;

/// 円。中心と半径だけ！⚪
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vector2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vector2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// 形状ローカルの円をワールド座標 (`offset` だけずらした位置) に置いたもの。
    pub fn translated(&self, offset: Vector2) -> Circle {
        Circle::new(self.center + offset, self.radius)
    }
}

/// 軸に平行な長方形 (AABB)。左上の角 (x, y) と幅・高さ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// 凸多角形だよ！🔷 頂点は順番通り (時計回りでも反時計回りでもOK) に並べてね。
///
/// `center` は重心。SAT で求めた押し出しベクトルの向きを決めるのに使うよ。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vector2>,
    pub center: Vector2,
}

impl Polygon {
    /// 頂点リストと重心を明示して作る。
    pub fn new(vertices: Vec<Vector2>, center: Vector2) -> Self {
        Self { vertices, center }
    }

    /// 頂点の平均を重心として作る。
    pub fn from_vertices(vertices: Vec<Vector2>) -> Self {
        let center = if vertices.is_empty() {
            Vector2::ZERO
        } else {
            vertices.iter().copied().sum::<Vector2>() / vertices.len() as f32
        };
        Self { vertices, center }
    }

    /// 左上が原点の `width` x `height` の長方形ポリゴン。
    pub fn rectangle(width: f32, height: f32) -> Self {
        Polygon::new(
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(width, 0.0),
                Vector2::new(width, height),
                Vector2::new(0.0, height),
            ],
            Vector2::new(width / 2.0, height / 2.0),
        )
    }

    pub fn add_vertex(&mut self, x: f32, y: f32) {
        self.vertices.push(Vector2::new(x, y));
    }

    pub fn set_center(&mut self, x: f32, y: f32) {
        self.center = Vector2::new(x, y);
    }

    /// 全部の頂点と重心を `offset` だけずらした新しいポリゴン。
    pub fn translated(&self, offset: Vector2) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
            center: self.center + offset,
        }
    }

    /// 辺を (始点, 終点) のペアで。最後の頂点から最初の頂点に戻る辺も含むよ。
    pub fn edges(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        let count = self.vertices.len();
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % count]))
    }
}
