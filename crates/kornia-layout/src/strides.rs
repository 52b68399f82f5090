/// Computes the strides for a row-major (C-contiguous) layout.
///
/// The rightmost dimension has stride 1, and each dimension's stride is the
/// product of all dimensions to its right. A rank-0 shape yields no strides.
///
/// # Arguments
///
/// * `shape` - The size of each dimension.
///
/// # Returns
///
/// A vector of strides, one per dimension.
///
/// # Examples
///
/// ```rust
/// use kornia_layout::calc_strides;
///
/// assert_eq!(calc_strides(&[2, 3]), vec![3, 1]);
/// assert_eq!(calc_strides(&[2, 3, 4]), vec![12, 4, 1]);
/// assert!(calc_strides(&[]).is_empty());
/// ```
pub fn calc_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        // the product over every axis is never stored
        if i > 0 {
            stride *= shape[i];
        }
    }
    strides
}

/// Returns true if `strides` are the row-major strides of `shape`.
pub fn is_standard_layout(shape: &[usize], strides: &[usize]) -> bool {
    shape.len() == strides.len() && calc_strides(shape) == strides
}

#[cfg(test)]
mod tests {
    use super::{calc_strides, is_standard_layout};

    #[test]
    fn strides_scalar() {
        assert_eq!(calc_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn strides_1d() {
        assert_eq!(calc_strides(&[7]), vec![1]);
    }

    #[test]
    fn strides_3d() {
        assert_eq!(calc_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(calc_strides(&[3, 1, 5]), vec![5, 5, 1]);
    }

    #[test]
    fn strides_huge_leading_dim() {
        assert_eq!(calc_strides(&[usize::MAX / 2 + 1, 2]), vec![2, 1]);
    }

    #[test]
    fn strides_recurrence() {
        let shape = [4, 2, 5, 3];
        let strides = calc_strides(&shape);
        assert_eq!(strides[shape.len() - 1], 1);
        for i in 0..shape.len() - 1 {
            assert_eq!(strides[i], strides[i + 1] * shape[i + 1]);
        }
    }

    #[test]
    fn standard_layout() {
        assert!(is_standard_layout(&[2, 3, 4], &[12, 4, 1]));
        assert!(!is_standard_layout(&[2, 3, 4], &[4, 12, 1]));
        assert!(!is_standard_layout(&[2, 3], &[3, 1, 1]));
    }
}
