use derive_more::Display;

use crate::model::geom::contains::{
    cap_contains_cap, cap_contains_circ, cap_contains_path, cap_contains_poly, cap_contains_pt,
    cap_contains_rt, cap_contains_seg, cap_contains_tri,
};
use crate::model::geom::distance::{
    cap_cap_dist, cap_circ_dist, cap_path_dist, cap_poly_dist, cap_rt_dist, cap_seg_dist,
    cap_tri_dist, pt_cap_dist,
};
use crate::model::geom::intersects::{
    cap_intersects_cap, cap_intersects_circ, cap_intersects_path, cap_intersects_poly,
    cap_intersects_rt, cap_intersects_seg, cap_intersects_tri,
};
use crate::model::primitive::circle::Circle;
use crate::model::primitive::point::Pt;
use crate::model::primitive::rect::Rt;
use crate::model::primitive::segment::Segment;
use crate::model::primitive::shape::Shape;
use crate::model::primitive::{circ, line, seg, ShapeOps};

#[derive(Debug, Copy, Clone, Display)]
#[display(fmt = "[{st}, {en}, r={r}]")]
pub struct Capsule {
    st: Pt,
    en: Pt,
    r: f64,
}

impl Capsule {
    pub const fn new(st: Pt, en: Pt, r: f64) -> Self {
        Self { st, en, r }
    }

    pub const fn r(&self) -> f64 {
        self.r
    }

    pub const fn st(&self) -> Pt {
        self.st
    }

    pub const fn en(&self) -> Pt {
        self.en
    }

    pub fn seg(&self) -> Segment {
        seg(self.st, self.en)
    }

    pub fn st_cap(&self) -> Circle {
        circ(self.st, self.r)
    }

    pub fn en_cap(&self) -> Circle {
        circ(self.en, self.r)
    }

    pub fn left_seg(&self) -> Segment {
        let n = (self.en - self.st).perp() * self.r;
        seg(self.st + n, self.en + n)
    }

    pub fn right_seg(&self) -> Segment {
        let n = (self.en - self.st).perp() * self.r;
        seg(self.st - n, self.en - n)
    }
}

impl ShapeOps for Capsule {
    fn bounds(&self) -> Rt {
        let r = line(self.st(), self.en()).bounds();
        r.inset(-self.r(), -self.r())
    }

    fn shape(self) -> Shape {
        Shape::Capsule(self)
    }

    fn intersects_shape(&self, s: &Shape) -> bool {
        match s {
            Shape::Capsule(s) => cap_intersects_cap(self, s),
            Shape::Circle(s) => cap_intersects_circ(self, s),
            Shape::Compound(s) => s.intersects_shape(&self.shape()),
            Shape::Line(s) => s.intersects_shape(&self.shape()),
            Shape::Path(s) => cap_intersects_path(self, s),
            Shape::Point(s) => cap_contains_pt(self, s),
            Shape::Polygon(s) => cap_intersects_poly(self, s),
            Shape::Rect(s) => cap_intersects_rt(self, s),
            Shape::Segment(s) => cap_intersects_seg(self, s),
            Shape::Tri(s) => cap_intersects_tri(self, s),
        }
    }

    fn contains_shape(&self, s: &Shape) -> bool {
        match s {
            Shape::Capsule(s) => cap_contains_cap(self, s),
            Shape::Circle(s) => cap_contains_circ(self, s),
            Shape::Compound(_) | Shape::Line(_) => false,
            Shape::Path(s) => cap_contains_path(self, s),
            Shape::Point(s) => cap_contains_pt(self, s),
            Shape::Polygon(s) => cap_contains_poly(self, s),
            Shape::Rect(s) => cap_contains_rt(self, s),
            Shape::Segment(s) => cap_contains_seg(self, s),
            Shape::Tri(s) => cap_contains_tri(self, s),
        }
    }

    fn dist_to_shape(&self, s: &Shape) -> f64 {
        match s {
            Shape::Capsule(s) => cap_cap_dist(self, s),
            Shape::Circle(s) => cap_circ_dist(self, s),
            Shape::Compound(s) => s.dist_to_shape(&self.shape()),
            Shape::Line(s) => s.dist_to_shape(&self.shape()),
            Shape::Path(s) => cap_path_dist(self, s),
            Shape::Point(s) => pt_cap_dist(s, self),
            Shape::Polygon(s) => cap_poly_dist(self, s),
            Shape::Rect(s) => cap_rt_dist(self, s),
            Shape::Segment(s) => cap_seg_dist(self, s),
            Shape::Tri(s) => cap_tri_dist(self, s),
        }
    }
}
