use crate::error::LayoutError;

/// How a valid permutation affected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermuteKind {
    /// The operands were reordered.
    Applied,
    /// The pattern is the identity; the operands are unchanged.
    NoOp,
}

impl PermuteKind {
    /// Returns true if the pattern was the identity.
    #[inline]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

/// The permuted copies returned by [`permute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permuted<T> {
    /// One permuted copy per operand, in operand order.
    pub arrays: Vec<Vec<T>>,
    /// Whether the pattern reordered anything.
    pub kind: PermuteKind,
}

impl<T> Permuted<T> {
    /// Returns true if the pattern was the identity.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.kind.is_noop()
    }

    /// Consumes the result and returns the permuted copies.
    pub fn into_arrays(self) -> Vec<Vec<T>> {
        self.arrays
    }
}

/// Returns true if `pattern[i] == i` for every axis.
pub fn is_identity(pattern: &[usize]) -> bool {
    pattern.iter().enumerate().all(|(i, &axis)| i == axis)
}

/// Checks that `pattern` is a permutation of the axes `[0, rank)`.
///
/// # Returns
///
/// [`PermuteKind::NoOp`] for the identity pattern, [`PermuteKind::Applied`] otherwise.
///
/// # Errors
///
/// * [`LayoutError::DimensionMismatch`] if the pattern length is not `rank`.
/// * [`LayoutError::InvalidAxis`] if an entry is `>= rank`.
/// * [`LayoutError::DuplicateAxis`] if an entry appears twice.
pub fn validate_permutation(pattern: &[usize], rank: usize) -> Result<PermuteKind, LayoutError> {
    if pattern.len() != rank {
        return Err(LayoutError::dimension_mismatch(
            "pattern",
            rank,
            pattern.len(),
        ));
    }

    let mut seen = vec![false; rank];
    for &axis in pattern {
        if axis >= rank {
            return Err(LayoutError::InvalidAxis { axis, rank });
        }
        if seen[axis] {
            return Err(LayoutError::DuplicateAxis { axis });
        }
        seen[axis] = true;
    }

    if is_identity(pattern) {
        return Ok(PermuteKind::NoOp);
    }
    Ok(PermuteKind::Applied)
}

// Validates the operand count and lengths, then the pattern against their rank.
fn validate_operands(
    pattern: &[usize],
    mut lens: impl Iterator<Item = usize>,
) -> Result<PermuteKind, LayoutError> {
    let rank = lens.next().ok_or(LayoutError::NoOperands)?;
    if let Some(len) = lens.find(|&len| len != rank) {
        return Err(LayoutError::dimension_mismatch("operand", rank, len));
    }

    let res = validate_permutation(pattern, rank);
    match &res {
        Ok(PermuteKind::NoOp) => log::trace!("identity permutation {pattern:?}, nothing to do"),
        Ok(PermuteKind::Applied) => {}
        Err(e) => log::debug!("rejected permutation {pattern:?}: {e}"),
    }
    res
}

/// Reorders the axes of one or more equal-rank arrays, returning copies.
///
/// Each output is `out[i] = array[pattern[i]]`. Typical operands are a shape and
/// its strides; validation runs once for all of them.
///
/// # Arguments
///
/// * `pattern` - `pattern[i]` names the source axis that becomes axis `i`.
/// * `arrays` - The operands to permute. Left untouched.
///
/// # Returns
///
/// The permuted copies in operand order. For the identity pattern the copies
/// equal the inputs and [`Permuted::kind`] is [`PermuteKind::NoOp`].
///
/// # Errors
///
/// * [`LayoutError::NoOperands`] if `arrays` is empty.
/// * [`LayoutError::DimensionMismatch`] if the operands, or the pattern, differ in length.
/// * [`LayoutError::InvalidAxis`] / [`LayoutError::DuplicateAxis`] if the pattern is
///   not a permutation of `[0, rank)`.
///
/// # Example
///
/// ```
/// use kornia_layout::{permute, PermuteKind, Shape};
///
/// let shape = Shape::from([2, 3, 4]);
/// let strides = shape.calc_strides();
///
/// let res = permute(&[1, 0, 2], &[&shape[..], &strides[..]]).unwrap();
/// assert_eq!(res.kind, PermuteKind::Applied);
/// assert_eq!(res.arrays, vec![vec![3, 2, 4], vec![4, 12, 1]]);
/// ```
pub fn permute<T, A>(pattern: &[usize], arrays: &[A]) -> Result<Permuted<T>, LayoutError>
where
    T: Copy,
    A: AsRef<[T]>,
{
    let kind = validate_operands(pattern, arrays.iter().map(|a| a.as_ref().len()))?;

    let arrays = arrays
        .iter()
        .map(|a| {
            let a = a.as_ref();
            match kind {
                PermuteKind::NoOp => a.to_vec(),
                PermuteKind::Applied => pattern.iter().map(|&axis| a[axis]).collect(),
            }
        })
        .collect();

    Ok(Permuted { arrays, kind })
}

/// Reorders the axes of one or more equal-rank arrays in place.
///
/// Same validation and semantics as [`permute`], but the operands are rewritten
/// instead of copied. Every operand is validated before the first one is
/// touched, so on error nothing has been modified.
///
/// # Arguments
///
/// * `pattern` - `pattern[i]` names the source axis that becomes axis `i`.
/// * `arrays` - The operands to permute.
///
/// # Errors
///
/// See [`permute`].
///
/// # Example
///
/// ```
/// use kornia_layout::{permute_in_place, PermuteKind};
///
/// let mut shape = vec![2, 3, 4];
/// let mut strides = vec![12, 4, 1];
///
/// let kind = permute_in_place(&[2, 0, 1], &mut [&mut shape, &mut strides]).unwrap();
/// assert_eq!(kind, PermuteKind::Applied);
/// assert_eq!(shape, [4, 2, 3]);
/// assert_eq!(strides, [1, 12, 4]);
/// ```
pub fn permute_in_place<T, A>(pattern: &[usize], arrays: &mut [A]) -> Result<PermuteKind, LayoutError>
where
    T: Copy,
    A: AsMut<[T]>,
{
    let kind = validate_operands(pattern, arrays.iter_mut().map(|a| a.as_mut().len()))?;
    if kind.is_noop() {
        return Ok(kind);
    }

    // staged through a buffer: writing straight back would clobber axes read later
    let mut buf = Vec::with_capacity(pattern.len());
    for a in arrays.iter_mut() {
        let a = a.as_mut();
        buf.clear();
        buf.extend(pattern.iter().map(|&axis| a[axis]));
        a.copy_from_slice(&buf);
    }

    Ok(kind)
}
