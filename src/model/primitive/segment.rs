use derive_more::Display;

use crate::model::geom::distance::{
    cap_seg_dist, circ_seg_dist, poly_seg_dist, pt_seg_dist, rt_seg_dist, seg_seg_dist,
    seg_path_dist, seg_tri_dist,
};
use crate::model::geom::intersects::{
    circ_intersects_seg, pt_intersects_seg, poly_intersects_seg, seg_intersects_seg,
    tri_intersects_seg,
};
use crate::model::primitive::line_shape::Line;
use crate::model::primitive::point::Pt;
use crate::model::primitive::rect::Rt;
use crate::model::primitive::shape::Shape;
use crate::model::primitive::{line, ShapeOps};

#[derive(Debug, Copy, Clone, Display)]
#[display(fmt = "[{st}, {en}]")]
pub struct Segment {
    st: Pt,
    en: Pt,
}

impl Segment {
    pub const fn new(st: Pt, en: Pt) -> Self {
        Self { st, en }
    }

    pub const fn st(&self) -> Pt {
        self.st
    }

    pub const fn en(&self) -> Pt {
        self.en
    }

    pub fn line(&self) -> Line {
        line(self.st, self.en)
    }

    // Returns true iff |p| lies within this segment's bounding box, assuming
    // |p| is already known to be collinear with the segment.
    pub fn contains(&self, p: Pt) -> bool {
        self.bounds().contains(p)
    }
}

impl ShapeOps for Segment {
    fn bounds(&self) -> Rt {
        Rt::enclosing(self.st, self.en)
    }

    fn shape(self) -> Shape {
        Shape::Segment(self)
    }

    fn intersects_shape(&self, s: &Shape) -> bool {
        match s {
            Shape::Capsule(s) => s.intersects_shape(&self.shape()),
            Shape::Circle(s) => circ_intersects_seg(s, self),
            Shape::Compound(s) => s.intersects_shape(&self.shape()),
            Shape::Line(s) => s.intersects_shape(&self.shape()),
            Shape::Path(s) => s.intersects_shape(&self.shape()),
            Shape::Point(s) => pt_intersects_seg(s, self),
            Shape::Polygon(s) => poly_intersects_seg(s, self),
            Shape::Rect(s) => s.intersects_shape(&Shape::Segment(*self)),
            Shape::Segment(s) => seg_intersects_seg(self, s),
            Shape::Tri(s) => tri_intersects_seg(s, self),
        }
    }

    // A segment has zero area; it can only contain a point or sub-segment
    // that lies entirely on it.
    fn contains_shape(&self, s: &Shape) -> bool {
        match s {
            Shape::Point(s) => pt_intersects_seg(s, self),
            Shape::Segment(s) => pt_intersects_seg(&s.st(), self) && pt_intersects_seg(&s.en(), self),
            _ => false,
        }
    }

    fn dist_to_shape(&self, s: &Shape) -> f64 {
        match s {
            Shape::Capsule(s) => cap_seg_dist(s, self),
            Shape::Circle(s) => circ_seg_dist(s, self),
            Shape::Compound(s) => s.dist_to_shape(&self.shape()),
            Shape::Line(s) => s.dist_to_shape(&self.shape()),
            Shape::Path(s) => seg_path_dist(self, s),
            Shape::Point(s) => pt_seg_dist(s, self),
            Shape::Polygon(s) => poly_seg_dist(s, self),
            Shape::Rect(s) => rt_seg_dist(s, self),
            Shape::Segment(s) => seg_seg_dist(self, s),
            Shape::Tri(s) => seg_tri_dist(self, s),
        }
    }
}
