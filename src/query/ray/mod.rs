//! Line tracing against triangles and triangle meshes.

pub use self::line_tracer::LineTracer;
pub use self::ray::Ray;

mod line_tracer;
mod ray;
