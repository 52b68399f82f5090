use num_traits::PrimInt;

/// Computes the quotient and remainder of `a / b` in a single call.
///
/// Division truncates toward zero, so for a non-negative `a` and positive `b`
/// the result satisfies `a == q * b + r` with `0 <= r < b`.
///
/// # Arguments
///
/// * `a` - The dividend.
/// * `b` - The divisor.
///
/// # Returns
///
/// The pair `(quotient, remainder)`.
///
/// # Panics
///
/// Panics if `b` is zero.
///
/// # Example
///
/// ```
/// use kornia_layout::divmod;
///
/// assert_eq!(divmod(5usize, 3), (1, 2));
/// assert_eq!(divmod(4i32, 2), (2, 0));
/// ```
#[inline]
pub fn divmod<T: PrimInt>(a: T, b: T) -> (T, T) {
    if b.is_zero() {
        panic!("divmod: division by zero");
    }
    let q = a / b;
    (q, a - q * b)
}
