use derive_more::Display;

use crate::model::geom::bounds::point_cloud_bounds;
use crate::model::geom::contains::{
    tri_contains_cap, tri_contains_circ, tri_contains_path, tri_contains_poly, tri_contains_pt,
    tri_contains_rt, tri_contains_seg, tri_contains_tri,
};
use crate::model::geom::convex::ensure_ccw;
use crate::model::geom::distance::{
    cap_tri_dist, circ_tri_dist, poly_tri_dist, pt_tri_dist, rt_tri_dist, seg_tri_dist,
    tri_path_dist, tri_tri_dist,
};
use crate::model::geom::intersects::{
    cap_intersects_tri, circ_intersects_tri, rt_intersects_tri, tri_intersects_path,
    tri_intersects_poly, tri_intersects_seg, tri_intersects_tri,
};
use crate::model::primitive::point::Pt;
use crate::model::primitive::rect::Rt;
use crate::model::primitive::shape::Shape;
use crate::model::primitive::ShapeOps;

#[derive(Debug, Copy, Clone, Display)]
#[display(fmt = "[{}, {}, {}]", "pts[0]", "pts[1]", "pts[2]")]
pub struct Tri {
    pts: [Pt; 3],
}

impl Tri {
    // Points are reordered CCW if necessary, matching Poly's convention.
    pub fn new(mut pts: [Pt; 3]) -> Self {
        ensure_ccw(&mut pts);
        Self { pts }
    }

    pub fn pts(&self) -> &[Pt; 3] {
        &self.pts
    }
}

impl std::ops::Index<usize> for Tri {
    type Output = Pt;

    fn index(&self, i: usize) -> &Pt {
        &self.pts[i]
    }
}

impl ShapeOps for Tri {
    fn bounds(&self) -> Rt {
        point_cloud_bounds(&self.pts)
    }

    fn shape(self) -> Shape {
        Shape::Tri(self)
    }

    fn intersects_shape(&self, s: &Shape) -> bool {
        match s {
            Shape::Capsule(s) => cap_intersects_tri(s, self),
            Shape::Circle(s) => circ_intersects_tri(s, self),
            Shape::Compound(s) => s.intersects_shape(&self.shape()),
            Shape::Line(s) => s.intersects_shape(&self.shape()),
            Shape::Path(s) => tri_intersects_path(self, s),
            Shape::Point(s) => tri_contains_pt(self, s),
            Shape::Polygon(s) => tri_intersects_poly(self, s),
            Shape::Rect(s) => rt_intersects_tri(s, self),
            Shape::Segment(s) => tri_intersects_seg(self, s),
            Shape::Tri(s) => tri_intersects_tri(self, s),
        }
    }

    fn contains_shape(&self, s: &Shape) -> bool {
        match s {
            Shape::Capsule(s) => tri_contains_cap(self, s),
            Shape::Circle(s) => tri_contains_circ(self, s),
            Shape::Compound(_) | Shape::Line(_) => false,
            Shape::Path(s) => tri_contains_path(self, s),
            Shape::Point(s) => tri_contains_pt(self, s),
            Shape::Polygon(s) => tri_contains_poly(self, s),
            Shape::Rect(s) => tri_contains_rt(self, s),
            Shape::Segment(s) => tri_contains_seg(self, s),
            Shape::Tri(s) => tri_contains_tri(self, s),
        }
    }

    fn dist_to_shape(&self, s: &Shape) -> f64 {
        match s {
            Shape::Capsule(s) => cap_tri_dist(s, self),
            Shape::Circle(s) => circ_tri_dist(s, self),
            Shape::Compound(s) => s.dist_to_shape(&self.shape()),
            Shape::Line(s) => s.dist_to_shape(&self.shape()),
            Shape::Path(s) => tri_path_dist(self, s),
            Shape::Point(s) => pt_tri_dist(s, self),
            Shape::Polygon(s) => poly_tri_dist(s, self),
            Shape::Rect(s) => rt_tri_dist(s, self),
            Shape::Segment(s) => seg_tri_dist(s, self),
            Shape::Tri(s) => tri_tri_dist(self, s),
        }
    }
}
