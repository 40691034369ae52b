use std::f64::consts::PI;
use std::ops::Mul;

use approx::assert_relative_eq;
use nalgebra::{vector, Matrix3};

use crate::model::primitive::capsule::Capsule;
use crate::model::primitive::circle::Circle;
use crate::model::primitive::compound::Compound;
use crate::model::primitive::line_shape::Line;
use crate::model::primitive::path_shape::Path;
use crate::model::primitive::point::Pt;
use crate::model::primitive::polygon::Poly;
use crate::model::primitive::rect::Rt;
use crate::model::primitive::segment::Segment;
use crate::model::primitive::shape::Shape;
use crate::model::primitive::triangle::Tri;
use crate::model::primitive::{cap, line, pt, seg, tri, ShapeOps};

// A 2D affine transform, represented as a 3x3 homogeneous matrix.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Tf {
    m: Matrix3<f64>,
}

impl Default for Tf {
    fn default() -> Self {
        Self::identity()
    }
}

impl Tf {
    pub fn identity() -> Self {
        Self { m: Matrix3::identity() }
    }

    pub fn scale(p: Pt) -> Self {
        Self { m: Matrix3::new_nonuniform_scaling(&vector![p.x, p.y]) }
    }

    pub fn translate(p: Pt) -> Self {
        Self { m: Matrix3::new_translation(&vector![p.x, p.y]) }
    }

    pub fn rotate(deg: f64) -> Self {
        Self { m: Matrix3::new_rotation(deg / 180.0 * PI) }
    }

    pub fn affine(from: &Rt, to: &Rt) -> Self {
        let xscale = to.w() / from.w();
        let yscale = to.h() / from.h();
        let offset = to.tl() - from.tl();
        Self::translate(offset) * Self::scale(pt(xscale, yscale))
    }

    pub fn inv(&self) -> Tf {
        Tf { m: self.m.try_inverse().unwrap() }
    }

    pub fn pt(&self, p: Pt) -> Pt {
        let v = self.m * vector![p.x, p.y, 1.0];
        pt(v.x, v.y)
    }

    pub fn pts(&self, p: &[Pt]) -> Vec<Pt> {
        p.iter().map(|&v| self.pt(v)).collect()
    }

    pub fn seg(&self, s: &Segment) -> Segment {
        seg(self.pt(s.st()), self.pt(s.en()))
    }

    pub fn rt(&self, r: &Rt) -> Rt {
        let a = self.pt(r.tl());
        let b = self.pt(r.br());
        Rt::enclosing(a, b)
    }

    // Assumes |self| is a similarity transformation (uniform scale).
    fn uniform_scale(&self) -> f64 {
        let radii = self.pt(pt(1.0, 1.0)) - self.pt(pt(0.0, 0.0));
        assert_relative_eq!(radii.x.abs(), radii.y.abs());
        radii.x.abs()
    }

    pub fn circle(&self, c: &Circle) -> Circle {
        Circle::new(self.pt(c.p()), c.r() * self.uniform_scale())
    }

    pub fn cap(&self, c: &Capsule) -> Capsule {
        cap(self.pt(c.st()), self.pt(c.en()), c.r() * self.uniform_scale())
    }

    pub fn poly(&self, p: &Poly) -> Poly {
        Poly::new(&self.pts(p.pts()))
    }

    pub fn line(&self, l: &Line) -> Line {
        line(self.pt(l.st()), self.pt(l.en()))
    }

    pub fn path(&self, p: &Path) -> Path {
        Path::new(&self.pts(p.pts()), p.r() * self.uniform_scale())
    }

    pub fn tri(&self, t: &Tri) -> Tri {
        tri(self.pt(t[0]), self.pt(t[1]), self.pt(t[2]))
    }

    pub fn compound(&self, c: &Compound) -> Compound {
        Compound::new(c.shapes().iter().map(|s| self.shape(s)).collect())
    }

    pub fn shape(&self, s: &Shape) -> Shape {
        match s {
            Shape::Capsule(s) => Shape::Capsule(self.cap(s)),
            Shape::Circle(s) => Shape::Circle(self.circle(s)),
            Shape::Compound(s) => self.compound(s).shape(),
            Shape::Line(s) => self.line(s).shape(),
            Shape::Path(s) => self.path(s).shape(),
            Shape::Point(s) => Shape::Point(self.pt(*s)),
            Shape::Polygon(s) => Shape::Polygon(self.poly(s)),
            Shape::Rect(s) => Shape::Rect(self.rt(s)),
            Shape::Segment(s) => Shape::Segment(self.seg(s)),
            Shape::Tri(s) => Shape::Tri(self.tri(s)),
        }
    }
}

impl Mul<Tf> for Tf {
    type Output = Tf;

    fn mul(self, rhs: Tf) -> Self::Output {
        Tf { m: self.m * rhs.m }
    }
}

impl Mul<&Tf> for &Tf {
    type Output = Tf;

    fn mul(self, rhs: &Tf) -> Self::Output {
        Tf { m: self.m * rhs.m }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::model::primitive::pt;

    #[test]
    fn test_translate() {
        let tf = Tf::translate(pt(1.0, 2.0));
        assert_relative_eq!(tf.pt(pt(3.0, 4.0)), pt(4.0, 6.0));
    }

    #[test]
    fn test_rotate_identity_roundtrip() {
        let tf = Tf::rotate(37.0);
        let p = pt(3.0, -1.5);
        let back = tf.inv().pt(tf.pt(p));
        assert_relative_eq!(back, p, epsilon = 1e-9);
    }
}
