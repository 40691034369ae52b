use crate::model::primitive::point::Pt;
use crate::model::primitive::rect::Rt;

pub fn pt_cloud_bounds(pts: &[Pt]) -> Rt {
    if pts.is_empty() {
        Rt::default()
    } else {
        let mut bl = pts[0];
        let mut tr = pts[0];
        for pt in pts {
            bl.x = bl.x.min(pt.x);
            bl.y = bl.y.min(pt.y);
            tr.x = tr.x.max(pt.x);
            tr.y = tr.y.max(pt.y);
        }
        Rt::enclosing(bl, tr)
    }
}

pub fn point_cloud_bounds(pts: &[Pt]) -> Rt {
    pt_cloud_bounds(pts)
}

pub fn rt_cloud_bounds(rts: impl Iterator<Item = Rt>) -> Rt {
    let mut out = Rt::empty();
    for r in rts {
        out = out.united(&r);
    }
    out
}
