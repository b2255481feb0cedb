// src/geometry/sat.rs
//! 分離軸定理 (SAT) で当たり判定をするよ！✂️
//!
//! 2つの凸図形は、「両方を投影した区間が重ならない軸」がひとつでもあれば離れてる。
//! 全部の候補軸で重なってたら衝突してて、一番重なりが小さい軸の方向に
//! その重なりの分だけ動かせば離れられる。これが最小移動ベクトル (MTV) だよ。
//!
//! 返すベクトルは全部 **1つ目の図形から2つ目の図形に向かう** 向きにそろえてある。
//! 1つ目の図形を離したいなら `-mtv`、2つ目なら `mtv` を足せばいい。

use crate::geometry::shapes::{Circle, Polygon, Rectangle};
use crate::geometry::vector::Vector2;

/// 軸に投影した時の区間 `[min, max]`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// 2つの区間を離すのに必要な距離。重なってなければ `None`。端がぴったり接してる時は `Some(0.0)`。
    ///
    /// 片方がもう片方を丸ごと含んでる時も、どっちかの端から抜け出す短い方の距離になる。
    pub fn overlap(&self, other: &Interval) -> Option<f32> {
        if self.min <= other.max && other.min <= self.max {
            Some((self.max - other.min).min(other.max - self.min))
        } else {
            None
        }
    }
}

/// ポリゴンの全頂点を軸に投影した区間。頂点がなければ `None`。
pub fn project_polygon(axis: Vector2, polygon: &Polygon) -> Option<Interval> {
    let mut scalars = polygon.vertices.iter().map(|vertex| axis.dot(*vertex));
    let first = scalars.next()?;
    Some(scalars.fold(Interval { min: first, max: first }, |interval, scalar| Interval {
        min: interval.min.min(scalar),
        max: interval.max.max(scalar),
    }))
}

/// 円を軸に投影した区間 `[axis·center - r, axis·center + r]`。
pub fn project_circle(axis: Vector2, circle: &Circle) -> Interval {
    let scalar = axis.dot(circle.center);
    Interval {
        min: scalar - circle.radius,
        max: scalar + circle.radius,
    }
}

/// 各辺の外向き法線 (単位ベクトル)。長さ 0 の辺 (重複頂点) は軸にならないのでスキップ。
fn edge_normals(polygon: &Polygon) -> impl Iterator<Item = Vector2> + '_ {
    polygon
        .edges()
        .map(|(start, end)| (end - start).perp().normalize_or_zero())
        .filter(|axis| *axis != Vector2::ZERO)
}

/// 今まで見た中で一番小さい重なり。
#[derive(Debug, Default)]
struct SmallestOverlap {
    best: Option<(Vector2, f32)>,
}

impl SmallestOverlap {
    fn offer(&mut self, axis: Vector2, overlap: f32) {
        // 同じ大きさなら先に見つけた軸を優先
        if self.best.map_or(true, |(_, smallest)| overlap < smallest) {
            self.best = Some((axis, overlap));
        }
    }

    /// MTV を作って、`from` から `to` に向く向きにそろえる。
    fn into_mtv(self, from: Vector2, to: Vector2) -> Option<Vector2> {
        let (axis, overlap) = self.best?;
        let mtv = axis * overlap;
        if mtv.dot(to - from) < 0.0 {
            Some(-mtv)
        } else {
            Some(mtv)
        }
    }
}

/// ポリゴン vs ポリゴン。
///
/// 両方のポリゴンの全辺の法線を候補軸にして、重ならない軸が見つかった瞬間に `None` で抜ける。
/// 全部重なってたら、重なりが最小の軸 × 重なりの長さを、`a` の重心から `b` の重心に
/// 向かう向きにして返すよ。
pub fn polygon_vs_polygon(a: &Polygon, b: &Polygon) -> Option<Vector2> {
    let mut smallest = SmallestOverlap::default();
    for axis in edge_normals(a).chain(edge_normals(b)) {
        let interval_a = project_polygon(axis, a)?;
        let interval_b = project_polygon(axis, b)?;
        let overlap = interval_a.overlap(&interval_b)?;
        smallest.offer(axis, overlap);
    }
    smallest.into_mtv(a.center, b.center)
}

/// ポリゴン vs 円。
///
/// 候補軸は「各辺の法線」と「各頂点から円の中心へのベクトル」。
/// 重なりが最小の軸で MTV を作って、ポリゴンの重心から円の中心に向かう向きで返す。
pub fn polygon_vs_circle(polygon: &Polygon, circle: &Circle) -> Option<Vector2> {
    let vertex_axes = polygon
        .vertices
        .iter()
        .map(|vertex| (circle.center - *vertex).normalize_or_zero())
        .filter(|axis| *axis != Vector2::ZERO);

    let mut smallest = SmallestOverlap::default();
    for axis in edge_normals(polygon).chain(vertex_axes) {
        let interval_polygon = project_polygon(axis, polygon)?;
        let interval_circle = project_circle(axis, circle);
        let overlap = interval_polygon.overlap(&interval_circle)?;
        smallest.offer(axis, overlap);
    }
    smallest.into_mtv(polygon.center, circle.center)
}

/// ポリゴンと円が重なってるかだけ知りたい時用。
pub fn polygon_intersects_circle(polygon: &Polygon, circle: &Circle) -> bool {
    polygon_vs_circle(polygon, circle).is_some()
}

/// 円 vs 円。中心間の距離が半径の和より小さければ衝突。
///
/// 返すベクトルは `a` の中心から `b` の中心への向きで、長さはめり込みの深さ (半径の和 - 距離)。
/// 中心がぴったり同じ時は向きが決められないのでゼロベクトルになるよ。
pub fn circle_vs_circle(a: &Circle, b: &Circle) -> Option<Vector2> {
    let total_radius = a.radius + b.radius;
    let distance = a.center.distance(b.center);
    if distance < total_radius {
        Some((b.center - a.center).normalize_or_zero() * (total_radius - distance))
    } else {
        None
    }
}

/// 軸に平行な長方形どうしの重なり判定 (4つの不等式)。ベクトルは返さないよ。
pub fn aabb_overlap(r1: &Rectangle, r2: &Rectangle) -> bool {
    r1.x < r2.x + r2.width
        && r1.x + r1.width > r2.x
        && r1.y < r2.y + r2.height
        && r1.y + r1.height > r2.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn approx(a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    /// 中心が (cx, cy)、一辺 2 の正方形 (半分の幅が 1)。
    fn square_at(cx: f32, cy: f32) -> Polygon {
        Polygon::rectangle(2.0, 2.0).translated(Vector2::new(cx - 1.0, cy - 1.0))
    }

    #[test]
    fn overlapping_squares_resolve_along_x_with_depth_one() {
        let mtv = polygon_vs_polygon(&square_at(0.0, 0.0), &square_at(1.0, 0.0)).expect("should collide");
        assert!(approx(mtv, Vector2::new(1.0, 0.0)), "got {:?}", mtv);
        assert!((mtv.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn interval_overlap_counts_escape_distance_when_contained() {
        let outer = Interval { min: 0.0, max: 10.0 };
        let inner = Interval { min: 1.0, max: 3.0 };
        assert_eq!(outer.overlap(&inner), Some(3.0));
        assert_eq!(inner.overlap(&outer), Some(3.0));
        assert_eq!(outer.overlap(&Interval { min: 8.0, max: 12.0 }), Some(2.0));
    }

    #[test]
    fn contained_square_is_pushed_all_the_way_out() {
        // 一辺 10 の正方形の中に、一辺 2 の正方形が右寄りに埋まってる
        let big = Polygon::rectangle(10.0, 10.0).translated(Vector2::new(-5.0, -5.0));
        let small = square_at(3.0, 0.0);
        let mtv = polygon_vs_polygon(&big, &small).expect("collide");
        assert!(approx(mtv, Vector2::new(3.0, 0.0)), "got {:?}", mtv);

        let pushed = small.translated(mtv);
        assert!(polygon_vs_polygon(&big, &pushed).map_or(true, |v| v.length() < EPS));
    }

    #[test]
    fn distant_squares_do_not_collide() {
        assert_eq!(polygon_vs_polygon(&square_at(0.0, 0.0), &square_at(3.0, 0.0)), None);
    }

    #[test]
    fn swapping_polygons_negates_mtv() {
        let a = square_at(0.0, 0.0);
        let b = square_at(1.0, 0.5);
        let ab = polygon_vs_polygon(&a, &b).expect("collide");
        let ba = polygon_vs_polygon(&b, &a).expect("collide");
        assert!(approx(ab, -ba), "{:?} vs {:?}", ab, ba);
    }

    #[test]
    fn triangle_and_square_collide() {
        let triangle = Polygon::new(
            vec![Vector2::new(25.0, 0.0), Vector2::new(50.0, 50.0), Vector2::new(0.0, 50.0)],
            Vector2::new(25.0, 25.0),
        )
        .translated(Vector2::new(40.0, 0.0));
        let square = Polygon::rectangle(50.0, 50.0);
        let mtv = polygon_vs_polygon(&square, &triangle).expect("collide");
        // 三角形は右にあるので、押し出しは右向き
        assert!(mtv.x > 0.0, "got {:?}", mtv);
    }

    #[test]
    fn empty_polygon_never_collides() {
        assert_eq!(polygon_vs_polygon(&Polygon::default(), &square_at(0.0, 0.0)), None);
    }

    #[test]
    fn circles_ground_truth() {
        let a = Circle::new(Vector2::new(0.0, 0.0), 5.0);
        let b = Circle::new(Vector2::new(8.0, 0.0), 4.0);
        let v = circle_vs_circle(&a, &b).expect("collide");
        assert!(approx(v, Vector2::new(1.0, 0.0)), "got {:?}", v);
    }

    #[test]
    fn touching_circles_do_not_collide() {
        let a = Circle::new(Vector2::new(0.0, 0.0), 5.0);
        let b = Circle::new(Vector2::new(9.0, 0.0), 4.0);
        assert_eq!(circle_vs_circle(&a, &b), None);
    }

    #[test]
    fn concentric_circles_collide_with_zero_vector() {
        let a = Circle::new(Vector2::new(2.0, 2.0), 1.0);
        assert_eq!(circle_vs_circle(&a, &a), Some(Vector2::ZERO));
    }

    #[test]
    fn polygon_vs_circle_pushes_toward_circle() {
        let square = square_at(0.0, 0.0);
        let circle = Circle::new(Vector2::new(1.5, 0.0), 1.0);
        let mtv = polygon_vs_circle(&square, &circle).expect("collide");
        assert!(approx(mtv, Vector2::new(0.5, 0.0)), "got {:?}", mtv);
        assert!(polygon_intersects_circle(&square, &circle));
    }

    #[test]
    fn polygon_vs_circle_separated_by_vertex_axis() {
        // 角の斜め先にある円: 辺の法線だけだと重なって見えるけど、頂点→中心の軸で分離できる
        let square = square_at(0.0, 0.0);
        let circle = Circle::new(Vector2::new(1.8, 1.8), 1.0);
        assert!(!polygon_intersects_circle(&square, &circle));
    }

    #[test]
    fn aabb_predicate() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(aabb_overlap(&a, &Rectangle::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!aabb_overlap(&a, &Rectangle::new(10.0, 0.0, 10.0, 10.0)), "edges touching is not overlap");
        assert!(!aabb_overlap(&a, &Rectangle::new(0.0, 20.0, 10.0, 10.0)));
    }

    proptest! {
        #[test]
        fn polygon_overlap_is_symmetric(
            ax in -20.0f32..20.0, ay in -20.0f32..20.0, aw in 1.0f32..10.0, ah in 1.0f32..10.0,
            bx in -20.0f32..20.0, by in -20.0f32..20.0, bw in 1.0f32..10.0, bh in 1.0f32..10.0,
        ) {
            let a = Polygon::rectangle(aw, ah).translated(Vector2::new(ax, ay));
            let b = Polygon::rectangle(bw, bh).translated(Vector2::new(bx, by));
            let ab = polygon_vs_polygon(&a, &b);
            let ba = polygon_vs_polygon(&b, &a);
            prop_assert_eq!(ab.is_some(), ba.is_some());
            if let (Some(ab), Some(ba)) = (ab, ba) {
                // 重心が軸の上で一致してると向きが決まらないので、その時だけは比較しない
                if ab.dot(b.center - a.center).abs() > EPS {
                    prop_assert!(approx(ab, -ba), "{:?} vs {:?}", ab, ba);
                }
            }
        }
    }
}
