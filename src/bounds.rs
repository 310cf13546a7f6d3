use crate::points::PointSet;

/// Axis-aligned bounding box for N-dimensional space.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl BoundingBox {
    /// The smallest box covering every point, or `None` for an empty set.
    pub fn from_points(points: &PointSet<'_>) -> Option<Self> {
        let mut iter = points.iter();
        let first = iter.next()?;
        let mut min = first.to_vec();
        let mut max = first.to_vec();
        for p in iter {
            for (i, &c) in p.iter().enumerate() {
                min[i] = min[i].min(c);
                max[i] = max[i].max(c);
            }
        }
        Some(Self { min, max })
    }

    /// Side length along `axis`.
    pub fn extent(&self, axis: usize) -> f64 {
        self.max[axis] - self.min[axis]
    }
}
