use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::strides::calc_strides;

/// The size of each dimension of a multi-dimensional array.
///
/// A thin owned wrapper over `Vec<usize>`. It dereferences to `[usize]` so it
/// can be passed anywhere a shape slice is expected.
///
/// # Example
///
/// ```
/// use kornia_layout::Shape;
///
/// let shape = Shape::from([2, 3, 4]);
/// assert_eq!(shape.rank(), 3);
/// assert_eq!(shape.total_size(), 24);
/// assert_eq!(shape.calc_strides(), vec![12, 4, 1]);
/// assert_eq!(shape.to_string(), "(2, 3, 4)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Creates a shape from its dimension sizes.
    pub fn new(dims: Vec<usize>) -> Self {
        Self(dims)
    }

    /// The number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// The number of elements described by the shape; 1 for a scalar.
    pub fn total_size(&self) -> usize {
        self.0.iter().product()
    }

    /// Returns true for a rank-0 shape.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true for a rank-1 shape.
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.0.len() == 1
    }

    /// Returns true for a rank-2 shape.
    #[inline]
    pub fn is_matrix(&self) -> bool {
        self.0.len() == 2
    }

    /// Row-major strides for this shape. See [`calc_strides`].
    pub fn calc_strides(&self) -> Vec<usize> {
        calc_strides(&self.0)
    }

    /// Consumes the shape and returns the dimension sizes.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Shape {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl AsMut<[usize]> for Shape {
    fn as_mut(&mut self) -> &mut [usize] {
        &mut self.0
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self(dims.to_vec())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::Shape;

    #[test]
    fn shape_scalar() {
        let shape = Shape::default();
        assert!(shape.is_scalar());
        assert_eq!(shape.total_size(), 1);
        assert!(shape.calc_strides().is_empty());
        assert_eq!(shape.to_string(), "()");
    }

    #[test]
    fn shape_predicates() {
        assert!(Shape::from([5]).is_vector());
        assert!(Shape::from([2, 3]).is_matrix());
        assert!(!Shape::from([2, 3, 4]).is_matrix());
    }

    #[test]
    fn shape_with_zero_dim() {
        let shape = Shape::from(vec![3, 0, 2]);
        assert_eq!(shape.total_size(), 0);
        assert_eq!(shape.calc_strides(), vec![0, 2, 1]);
    }

    #[test]
    fn shape_deref() {
        let shape = Shape::from(&[4usize, 5][..]);
        assert_eq!(&shape[..], &[4, 5]);
        assert_eq!(shape.iter().sum::<usize>(), 9);
        assert_eq!(shape.into_vec(), vec![4, 5]);
    }
}
