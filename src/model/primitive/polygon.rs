use earcutr::earcut;

use crate::model::geom::bounds::point_cloud_bounds;
use crate::model::geom::contains::{
    poly_contains_cap, poly_contains_circ, poly_contains_path, poly_contains_poly,
    poly_contains_pt, poly_contains_rt, poly_contains_seg, poly_contains_tri,
};
use crate::model::geom::convex::{ensure_ccw, is_convex_ccw, remove_collinear};
use crate::model::geom::distance::{
    cap_poly_dist, circ_poly_dist, path_poly_dist, poly_poly_dist, poly_pt_dist, poly_rt_dist,
    poly_seg_dist, poly_tri_dist,
};
use crate::model::geom::intersects::{
    cap_intersects_poly, circ_intersects_poly, path_intersects_poly, poly_intersects_poly,
    poly_intersects_rt, poly_intersects_seg, tri_intersects_poly,
};
use crate::model::primitive::point::Pt;
use crate::model::primitive::rect::Rt;
use crate::model::primitive::shape::Shape;
use crate::model::primitive::triangle::Tri;
use crate::model::primitive::{tri, ShapeOps};

// Represents a simple, possibly non-convex, polygon. Points are stored in CCW
// order with collinear points removed.
#[derive(Debug, Clone)]
pub struct Poly {
    pts: Vec<Pt>,
    tri: Vec<Tri>,
}

impl Poly {
    pub fn new(pts: &[Pt]) -> Self {
        let mut pts = remove_collinear(pts);
        ensure_ccw(&mut pts);
        let verts: Vec<f64> = pts.iter().flat_map(|v| [v.x, v.y]).collect();
        let tri_idx: Vec<usize> = earcut(&verts, &[], 2).unwrap_or_default();
        let tri = tri_idx
            .chunks_exact(3)
            .map(|v| tri(pts[v[0]], pts[v[1]], pts[v[2]]))
            .collect();
        Self { pts, tri }
    }

    pub fn pts(&self) -> &[Pt] {
        &self.pts
    }

    // Consecutive point pairs forming the polygon boundary, wrapping around.
    pub fn edges(&self) -> impl Iterator<Item = [&Pt; 2]> {
        edges(&self.pts)
    }

    pub fn tri(&self) -> &[Tri] {
        &self.tri
    }

    pub fn is_convex(&self) -> bool {
        is_convex_ccw(&self.pts)
    }
}

// Consecutive pairs of a closed point loop, wrapping from the last point back to the first.
pub fn edges(pts: &[Pt]) -> impl Iterator<Item = [&Pt; 2]> {
    (0..pts.len()).map(move |i| [&pts[i], &pts[(i + 1) % pts.len()]])
}

impl ShapeOps for Poly {
    fn bounds(&self) -> Rt {
        point_cloud_bounds(&self.pts)
    }

    fn shape(self) -> Shape {
        Shape::Polygon(self)
    }

    fn intersects_shape(&self, s: &Shape) -> bool {
        match s {
            Shape::Capsule(s) => cap_intersects_poly(s, self),
            Shape::Circle(s) => circ_intersects_poly(s, self),
            Shape::Compound(s) => s.intersects_shape(&self.clone().shape()),
            Shape::Line(s) => s.intersects_shape(&self.clone().shape()),
            Shape::Path(s) => path_intersects_poly(s, self),
            Shape::Point(s) => poly_contains_pt(self, s),
            Shape::Polygon(s) => poly_intersects_poly(self, s),
            Shape::Rect(s) => poly_intersects_rt(self, s),
            Shape::Segment(s) => poly_intersects_seg(self, s),
            Shape::Tri(s) => tri_intersects_poly(s, self),
        }
    }

    fn contains_shape(&self, s: &Shape) -> bool {
        match s {
            Shape::Capsule(s) => poly_contains_cap(self, s),
            Shape::Circle(s) => poly_contains_circ(self, s),
            Shape::Compound(_) | Shape::Line(_) => false,
            Shape::Path(s) => poly_contains_path(self, s),
            Shape::Point(s) => poly_contains_pt(self, s),
            Shape::Polygon(s) => poly_contains_poly(self, s),
            Shape::Rect(s) => poly_contains_rt(self, s),
            Shape::Segment(s) => poly_contains_seg(self, s),
            Shape::Tri(s) => poly_contains_tri(self, s),
        }
    }

    fn dist_to_shape(&self, s: &Shape) -> f64 {
        match s {
            Shape::Capsule(s) => cap_poly_dist(s, self),
            Shape::Circle(s) => circ_poly_dist(s, self),
            Shape::Compound(s) => s.dist_to_shape(&self.clone().shape()),
            Shape::Line(s) => s.dist_to_shape(&self.clone().shape()),
            Shape::Path(s) => path_poly_dist(s, self),
            Shape::Point(s) => poly_pt_dist(self, s),
            Shape::Polygon(s) => poly_poly_dist(self, s),
            Shape::Rect(s) => poly_rt_dist(self, s),
            Shape::Segment(s) => poly_seg_dist(self, s),
            Shape::Tri(s) => poly_tri_dist(self, s),
        }
    }
}
