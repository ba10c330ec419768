//! Mixed-radix digit vectors.
//!
//! A quantity is an array of digits, most significant first. Digit `i`
//! counts units of `1 / radices[i]` of digit `i - 1`; the leading radix is the
//! modulus of the whole quantity (7 for weekdays, 27 for lunar mansions).
//! For the leading digit of a fraction-only operand the radix entry is unused.

/// Advance a per-digit linear motion `n` steps from `offsets`.
///
/// Each digit is `coeffs[i] * n + offsets[i]` plus the carry from the right,
/// reduced by its radix. The leading digit is reduced too, so the result is
/// always in canonical form.
pub fn accumulate<const N: usize>(
    coeffs: &[i64; N],
    offsets: &[i64; N],
    radices: &[i64; N],
    n: i64,
) -> [i64; N] {
    let mut out = [0; N];
    let mut carry = 0;
    for i in (0..N).rev() {
        let v = coeffs[i] * n + offsets[i] + carry;
        out[i] = v % radices[i];
        carry = v / radices[i];
    }
    out
}

/// Add digit-wise, carrying at most one unit per position.
///
/// Both operands must already be in canonical form below their radices.
/// A carry out of the leading digit is dropped (modular wrap).
pub fn add_digits<const N: usize>(a: &[i64; N], b: &[i64; N], radices: &[i64; N]) -> [i64; N] {
    let mut out = [0; N];
    let mut carry = 0;
    for i in (0..N).rev() {
        let v = a[i] + b[i] + carry;
        if v >= radices[i] {
            out[i] = v - radices[i];
            carry = 1;
        } else {
            out[i] = v;
            carry = 0;
        }
    }
    out
}

/// Borrow flags for `a - b`: position `i` borrows when `b[i] > a[i]`.
///
/// The leading digit never borrows.
pub fn borrow_flags<const N: usize>(a: &[i64; N], b: &[i64; N]) -> [bool; N] {
    let mut flags = [false; N];
    for i in 1..N {
        flags[i] = b[i] > a[i];
    }
    flags
}

/// Subtract `b` from `a` using precomputed borrow flags.
///
/// A borrowing position gains its radix and costs the position to its left
/// one unit. Digits are not normalized afterwards; see [`normalize`].
pub fn subtract_digits<const N: usize>(
    a: &[i64; N],
    b: &[i64; N],
    borrows: &[bool; N],
    radices: &[i64; N],
) -> [i64; N] {
    let mut out = [0; N];
    for i in 0..N {
        let mut v = a[i] - b[i];
        if borrows[i] {
            v += radices[i];
        }
        if i + 1 < N && borrows[i + 1] {
            v -= 1;
        }
        out[i] = v;
    }
    out
}

/// Right-to-left sweep that lifts negative digits by their radix.
///
/// A lifted digit takes one unit from its left neighbour. A negative leading
/// digit is lifted without a neighbour to charge.
pub fn normalize<const N: usize>(digits: &mut [i64; N], radices: &[i64; N]) {
    for i in (0..N).rev() {
        if digits[i] < 0 {
            digits[i] += radices[i];
            if i > 0 {
                digits[i - 1] -= 1;
            }
        }
    }
}

/// Multiply by a small factor, carrying through every position but the
/// leading one, which is left unreduced.
pub fn multiply_digits<const N: usize>(
    digits: &[i64; N],
    radices: &[i64; N],
    factor: i64,
) -> [i64; N] {
    let mut out = [0; N];
    let mut carry = 0;
    for i in (0..N).rev() {
        let v = digits[i] * factor + carry;
        if i == 0 {
            out[0] = v;
        } else {
            out[i] = v % radices[i];
            carry = v / radices[i];
        }
    }
    out
}

/// Long division from the leading digit down. Returns the quotient digits
/// and the final remainder in units of the last position.
pub fn long_divide<const N: usize>(
    digits: &[i64; N],
    radices: &[i64; N],
    divisor: i64,
) -> ([i64; N], i64) {
    let mut out = [0; N];
    let mut rem = 0;
    for i in 0..N {
        let v = if i == 0 {
            digits[0]
        } else {
            radices[i] * rem + digits[i]
        };
        out[i] = v / divisor;
        rem = v % divisor;
    }
    (out, rem)
}

/// Combine a tabulated base with an interpolated fraction `q`.
///
/// On the rising half of a table the result is `base + q`. On the falling
/// half it is `base - q`, written in complement form: the leading digit
/// loses one extra unit and each lower digit becomes `radix - 1 - q`, except
/// the last, which becomes `radix - q`.
pub fn signed_correction<const N: usize>(
    base: i64,
    q: &[i64; N],
    radices: &[i64; N],
    rising: bool,
) -> [i64; N] {
    let mut out = [0; N];
    if rising {
        out.copy_from_slice(q);
        out[0] = base + q[0];
    } else {
        out[0] = base - q[0] - 1;
        for i in 1..N {
            out[i] = radices[i] - 1 - q[i];
        }
        out[N - 1] += 1;
    }
    out
}
