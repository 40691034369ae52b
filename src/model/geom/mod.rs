pub mod bounds;
pub mod contains;
pub mod convex;
pub mod distance;
pub mod intersects;
pub mod math;
pub mod quadtree;
