/// Per-axis coordinate access for points stored in a [`KdTree`](crate::KdTree).
///
/// The dimensionality is the const parameter `D`; every axis `0 <= axis < D`
/// must be readable. Coordinates are expected to be finite.
pub trait KdPoint<const D: usize> {
    /// Coordinate of the point along `axis`.
    fn coordinate(&self, axis: usize) -> f64;

    /// Copies all coordinates into a fixed-size array.
    fn to_array(&self) -> [f64; D] {
        std::array::from_fn(|axis| self.coordinate(axis))
    }
}

impl<const D: usize> KdPoint<D> for [f64; D] {
    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        self[axis]
    }

    fn to_array(&self) -> [f64; D] {
        *self
    }
}

impl<const D: usize> KdPoint<D> for [f32; D] {
    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        self[axis] as f64
    }
}

impl KdPoint<2> for (f64, f64) {
    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        match axis {
            0 => self.0,
            1 => self.1,
            _ => panic!("axis {} out of range for a 2D point", axis),
        }
    }
}

impl KdPoint<3> for (f64, f64, f64) {
    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        match axis {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("axis {} out of range for a 3D point", axis),
        }
    }
}

impl<T: KdPoint<D> + ?Sized, const D: usize> KdPoint<D> for &T {
    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        (**self).coordinate(axis)
    }
}

/// Squared Euclidean distance between a point and an origin over all `D` axes.
#[inline]
pub fn squared_distance<P: KdPoint<D> + ?Sized, const D: usize>(point: &P, origin: &[f64; D]) -> f64 {
    let mut d2 = 0.0;
    for axis in 0..D {
        let x = point.coordinate(axis) - origin[axis];
        d2 += x * x;
    }
    d2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_adapters() {
        assert_eq!(KdPoint::<2>::to_array(&(1.0f64, 2.0f64)), [1.0, 2.0]);
        assert_eq!(KdPoint::<3>::coordinate(&[1.0f32, 2.5, 3.0], 1), 2.5);
        assert_eq!(squared_distance(&(1.0f64, 1.0f64, 1.0f64), &[0.0, 0.0, 0.0]), 3.0);

        let p = [3.0f64, 4.0];
        let r = &p;
        assert_eq!(squared_distance(&r, &[0.0, 0.0]), 25.0);
    }
}
