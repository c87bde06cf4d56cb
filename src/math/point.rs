// src/math/point.rs

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 地図上の2次元座標（x: 北方向, y: 東方向, 単位 m）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// 2点間の距離
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// 方位と距離から新しい座標を求める
    ///
    /// # 引数
    /// - `heading`: 方位（度）
    /// - `distance`: 距離（m）
    pub fn point_from_heading(&self, heading: f64, distance: f64) -> Point {
        let rad = heading.to_radians();
        Point {
            x: self.x + rad.cos() * distance,
            y: self.y + rad.sin() * distance,
        }
    }

    /// 半径 `radius` 以内のランダムな点
    ///
    /// # 引数
    /// - `radius`: 最大距離
    /// - `margin`: 最小距離（中心からこの距離以上離れた点を返す）
    /// - `rng`: 乱数源
    pub fn random_point_within<R: Rng + ?Sized>(&self, radius: f64, margin: f64, rng: &mut R) -> Point {
        let heading = rng.gen_range(0.0..360.0);
        let distance = if radius > margin {
            rng.gen_range(margin..radius)
        } else {
            margin
        };
        self.point_from_heading(heading, distance)
    }

    /// 線分 `a`-`b` までの最短距離
    pub fn distance_to_segment(&self, a: &Point, b: &Point) -> f64 {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.distance_to(a);
        }
        let t = (((self.x - a.x) * dx + (self.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
        self.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
    }
}
