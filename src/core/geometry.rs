//=========================================================================
// Geometry Primitives & Query Seam
//=========================================================================
//
// 2D vector and axis-aligned bounds types used by the containment core,
// plus the `GeometryQuery` trait through which all containment and
// intersection tests are performed.
//
// The query is a consumed seam: the core never owns collision logic.
// `AabbQuery` is the default closed-interval implementation used by the
// runtime and by tests; a game may inject its own (e.g. one backed by a
// physics engine) at core construction.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::ops::{Add, AddAssign, Sub};

//=== Vec2 ================================================================

/// A 2D vector with `f32` components.
///
/// Used for positions, half-extents, and pointer samples. Depth (z)
/// components of externally owned transforms are never touched by the
/// core, so two components are all it needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a vector from components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

//=== Bounds ==============================================================

/// An axis-aligned box described by a center and half-extents.
///
/// All interval tests are closed: a point exactly on an edge counts as
/// inside. This matters for the containment check, where the entity is
/// allowed to sit precisely on the region boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub center: Vec2,
    pub extents: Vec2,
}

impl Bounds {
    /// Creates bounds from a center and half-extents.
    #[inline]
    pub const fn new(center: Vec2, extents: Vec2) -> Self {
        Self { center, extents }
    }

    /// Degenerate bounds covering a single point.
    #[inline]
    pub const fn point(p: Vec2) -> Self {
        Self::new(p, Vec2::ZERO)
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.extents
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.extents
    }

    /// Closed-interval point containment on both axes.
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        (p.x - self.center.x).abs() <= self.extents.x
            && (p.y - self.center.y).abs() <= self.extents.y
    }

    /// Closed-interval overlap test against another box.
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        (self.center.x - other.center.x).abs() <= self.extents.x + other.extents.x
            && (self.center.y - other.center.y).abs() <= self.extents.y + other.extents.y
    }
}

//=== GeometryQuery =======================================================

/// Spatial query interface consumed by the containment core.
///
/// The core performs every containment and intersection test through this
/// trait and never inspects geometry directly, so a game can substitute
/// its own collision backend without touching core logic.
pub trait GeometryQuery {
    /// Returns `true` if `point` lies within `bounds` (closed intervals).
    fn contains(&self, bounds: &Bounds, point: Vec2) -> bool;

    /// Returns `true` if two boxes overlap (closed intervals).
    fn intersects(&self, a: &Bounds, b: &Bounds) -> bool;
}

//=== AabbQuery ===========================================================

/// Default axis-aligned implementation of [`GeometryQuery`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbQuery;

impl GeometryQuery for AabbQuery {
    #[inline]
    fn contains(&self, bounds: &Bounds, point: Vec2) -> bool {
        bounds.contains_point(point)
    }

    #[inline]
    fn intersects(&self, a: &Bounds, b: &Bounds) -> bool {
        a.overlaps(b)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
