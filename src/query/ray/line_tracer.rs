use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::Ray;
use crate::shape::{Triangle, TriangleMesh};

/// Line-of-sight queries between rays and triangles.
pub struct LineTracer;

impl LineTracer {
    /// Does `ray` go past `triangle` without hitting it?
    #[inline]
    pub fn can_trace_line(ray: &Ray, triangle: &Triangle) -> bool {
        Self::ray_hit_point(ray, triangle).is_none()
    }

    /// The point where `ray` hits `triangle`, if any.
    ///
    /// This is the Möller–Trumbore algorithm. A ray parallel to the triangle's plane never
    /// hits. The barycentric bounds are tolerant by `DEFAULT_EPSILON`, so hits on the edges
    /// count. Hits at the very start of the ray, or (for a segment) at its very end, do not.
    pub fn ray_hit_point(ray: &Ray, triangle: &Triangle) -> Option<Point<Real>> {
        let eps = DEFAULT_EPSILON;
        let side_a = triangle.side_a();
        let side_b = triangle.side_b();
        let dir = ray.direction();

        let p = dir.cross(&side_b);
        let det = side_a.dot(&p);

        if det.abs() < eps {
            return None;
        }

        let inv_det = 1.0 / det;
        let t = ray.start - triangle.b;
        let u = t.dot(&p) * inv_det;

        if u < -eps || u > 1.0 + eps {
            return None;
        }

        let q = t.cross(&side_a);
        let v = dir.dot(&q) * inv_det;

        if v < -eps || u + v > 1.0 + eps {
            return None;
        }

        let t_hit = side_b.dot(&q) * inv_det;

        if t_hit <= eps || (!ray.infinite_length && t_hit > 1.0 - eps) {
            return None;
        }

        Some(ray.point_at(t_hit))
    }

    /// The hit point of `ray` on `mesh` closest to the start of the ray, if any.
    pub fn ray_hit_point_on_mesh(ray: &Ray, mesh: &TriangleMesh) -> Option<Point<Real>> {
        mesh.world_triangles()
            .filter_map(|tri| Self::ray_hit_point(ray, &tri))
            .min_by(|a, b| {
                na::distance_squared(&ray.start, a).total_cmp(&na::distance_squared(&ray.start, b))
            })
    }
}
