/// Generic bounding box for N-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// Returns true if the point lies inside the box, borders included.
    pub fn contains(&self, point: &[f64; D]) -> bool {
        (0..D).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Extent of the box along `axis`.
    pub fn extent(&self, axis: usize) -> f64 {
        self.max[axis] - self.min[axis]
    }

    /// Cuts the box with the hyperplane `x[axis] = boundary`.
    ///
    /// The boundary is clamped into the box, so a split outside the box yields
    /// one degenerate half and one half equal to the box itself.
    pub fn split(&self, axis: usize, boundary: f64) -> (Self, Self) {
        let b = boundary.clamp(self.min[axis], self.max[axis]);
        let mut lower = *self;
        let mut upper = *self;
        lower.max[axis] = b;
        upper.min[axis] = b;
        (lower, upper)
    }

    /// Squared distance from `point` to the closest point of the box, zero inside.
    pub fn squared_distance_to(&self, point: &[f64; D]) -> f64 {
        let mut d2 = 0.0;
        for i in 0..D {
            let v = point[i];
            if v < self.min[i] {
                d2 += (self.min[i] - v).powi(2);
            } else if v > self.max[i] {
                d2 += (v - self.max[i]).powi(2);
            }
        }
        d2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_clamps_boundary() {
        let bounds = BoundingBox::new([0.0, 0.0], [10.0, 4.0]);

        let (lower, upper) = bounds.split(0, 3.0);
        assert_eq!(lower.max, [3.0, 4.0]);
        assert_eq!(upper.min, [3.0, 0.0]);

        let (lower, upper) = bounds.split(1, 12.0);
        assert_eq!(lower, bounds);
        assert_eq!(upper.extent(1), 0.0);
    }

    #[test]
    fn test_squared_distance_to() {
        let bounds = BoundingBox::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(bounds.squared_distance_to(&[0.5, 0.5, 0.5]), 0.0);
        assert!((bounds.squared_distance_to(&[2.0, 0.5, -1.0]) - 2.0).abs() < 1e-12);
        assert!(bounds.contains(&[1.0, 0.0, 0.5]));
        assert!(!bounds.contains(&[1.0, 0.0, 1.5]));
    }
}
