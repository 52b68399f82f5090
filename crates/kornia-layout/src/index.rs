use crate::divmod::divmod;
use crate::error::LayoutError;

fn check_strides(shape: &[usize], strides: &[usize]) -> Result<(), LayoutError> {
    if shape.len() != strides.len() {
        return Err(LayoutError::dimension_mismatch(
            "strides",
            shape.len(),
            strides.len(),
        ));
    }
    Ok(())
}

/// Get the linear offset of the element at the given coordinate.
///
/// The offset is `sum(coordinate[i] * strides[i])`. Coordinates are not checked
/// against the shape; an out-of-range component yields an out-of-range offset.
///
/// # Arguments
///
/// * `shape` - The size of each dimension.
/// * `strides` - The offset delta of each dimension.
/// * `coordinate` - One index per dimension.
///
/// # Errors
///
/// Returns [`LayoutError::DimensionMismatch`] if `strides` or `coordinate` do not
/// have the same length as `shape`.
///
/// # Example
///
/// ```
/// use kornia_layout::ltoi;
///
/// assert_eq!(ltoi(&[2, 3, 4], &[12, 4, 1], &[1, 2, 3]), Ok(23));
/// ```
pub fn ltoi(shape: &[usize], strides: &[usize], coordinate: &[usize]) -> Result<usize, LayoutError> {
    check_strides(shape, strides)?;
    if coordinate.len() != shape.len() {
        return Err(LayoutError::dimension_mismatch(
            "coordinate",
            shape.len(),
            coordinate.len(),
        ));
    }

    let mut offset = 0;
    for (&idx, &stride) in coordinate.iter().zip(strides) {
        offset += idx * stride;
    }
    Ok(offset)
}

/// Get the coordinate of the element at the given offset. The reverse of [`ltoi`].
///
/// The offset is decomposed by repeated [`divmod`] over the axes in order of
/// decreasing stride, so row-major strides and any permutation of them (for
/// example strides returned by [`crate::permute`]) are inverted exactly. Axes
/// with a zero stride are broadcast, and they always get coordinate 0, as do
/// axes of size 1.
///
/// # Arguments
///
/// * `offset` - The linear offset into the backing storage.
/// * `shape` - The size of each dimension.
/// * `strides` - The offset delta of each dimension.
///
/// # Errors
///
/// Returns [`LayoutError::DimensionMismatch`] if `strides` and `shape` differ in
/// length, and [`LayoutError::UnreachableOffset`] if no coordinate produces
/// `offset` under `strides`.
///
/// # Example
///
/// ```
/// use kornia_layout::itol;
///
/// assert_eq!(itol(23, &[2, 3, 4], &[12, 4, 1]), Ok(vec![1, 2, 3]));
/// // strides of the same data with the first two axes swapped
/// assert_eq!(itol(23, &[3, 2, 4], &[4, 12, 1]), Ok(vec![2, 1, 3]));
/// ```
pub fn itol(offset: usize, shape: &[usize], strides: &[usize]) -> Result<Vec<usize>, LayoutError> {
    check_strides(shape, strides)?;

    // stable, so equal strides keep the row-major axis order
    let mut axes: Vec<usize> = (0..strides.len()).collect();
    axes.sort_by(|&a, &b| strides[b].cmp(&strides[a]));

    let mut coordinate = vec![0; shape.len()];
    let mut rem = offset;
    for axis in axes {
        // size-1 axes can share a stride with a real axis
        if strides[axis] == 0 || shape[axis] == 1 {
            continue;
        }
        let (q, r) = divmod(rem, strides[axis]);
        coordinate[axis] = q;
        rem = r;
    }

    if rem != 0 {
        return Err(LayoutError::UnreachableOffset {
            offset,
            remainder: rem,
        });
    }

    Ok(coordinate)
}
