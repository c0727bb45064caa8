//! Small helpers over [`ndarray::Array2`] for the grid operations the navicust needs.

pub fn transpose<T>(arr: &ndarray::Array2<T>) -> ndarray::Array2<T>
where
    T: Clone,
{
    arr.t().as_standard_layout().into_owned()
}

/// Reverses each row, i.e. mirrors horizontally.
pub fn flip_rows<T>(arr: &ndarray::Array2<T>) -> ndarray::Array2<T>
where
    T: Clone,
{
    arr.slice(ndarray::s![.., ..;-1]).as_standard_layout().into_owned()
}

/// Reverses the order of rows, i.e. mirrors vertically.
pub fn flip_cols<T>(arr: &ndarray::Array2<T>) -> ndarray::Array2<T>
where
    T: Clone,
{
    arr.slice(ndarray::s![..;-1, ..]).as_standard_layout().into_owned()
}

/// Rotates 90 degrees clockwise.
pub fn rot90<T>(arr: &ndarray::Array2<T>) -> ndarray::Array2<T>
where
    T: Clone,
{
    flip_rows(&transpose(arr))
}

pub fn rotate<T>(arr: &ndarray::Array2<T>, num: usize) -> std::borrow::Cow<'_, ndarray::Array2<T>>
where
    T: Clone,
{
    let mut arr = std::borrow::Cow::Borrowed(arr);
    for _ in 0..num % 4 {
        arr = std::borrow::Cow::Owned(rot90(&arr));
    }
    arr
}

/// Copies out the `h` by `w` region at `(y, x)`, clipped to the bounds of `arr`.
pub fn subarray<T>(arr: &ndarray::Array2<T>, y: usize, x: usize, h: usize, w: usize) -> ndarray::Array2<T>
where
    T: Clone,
{
    let (height, width) = arr.dim();
    let y0 = y.min(height);
    let x0 = x.min(width);
    let y1 = y.saturating_add(h).min(height);
    let x1 = x.saturating_add(w).min(width);
    arr.slice(ndarray::s![y0..y1, x0..x1]).to_owned()
}

/// Interprets a row-major byte mask as a grid of occupied cells.
pub fn from_flat(buf: &[u8], width: usize, height: usize) -> Option<ndarray::Array2<bool>> {
    ndarray::Array2::from_shape_vec(
        (height, width),
        buf.get(..width * height)?.iter().map(|v| *v != 0).collect(),
    )
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> ndarray::Array2<u8> {
        ndarray::array![[1, 0, 0], [1, 0, 0], [1, 1, 0]]
    }

    #[test]
    fn test_rot90() {
        assert_eq!(rot90(&l_shape()), ndarray::array![[1, 1, 1], [1, 0, 0], [0, 0, 0]]);
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let shapes = vec![
            l_shape(),
            ndarray::array![[1, 2, 3, 4], [5, 6, 7, 8]],
            ndarray::array![[9]],
            ndarray::Array2::from_shape_fn((7, 7), |(y, x)| (y * 7 + x) as u8),
        ];
        for shape in shapes {
            assert_eq!(*rotate(&shape, 4), shape);
            assert_eq!(*rotate(&shape, 0), shape);
            assert_eq!(*rotate(&shape, 5), rot90(&shape));
        }
    }

    #[test]
    fn test_non_square_rotation() {
        let arr = ndarray::array![[1, 2, 3], [4, 5, 6]];
        assert_eq!(rot90(&arr), ndarray::array![[4, 1], [5, 2], [6, 3]]);
    }

    #[test]
    fn test_flips_and_transpose() {
        let arr = ndarray::array![[1, 2], [3, 4]];
        assert_eq!(transpose(&arr), ndarray::array![[1, 3], [2, 4]]);
        assert_eq!(flip_rows(&arr), ndarray::array![[2, 1], [4, 3]]);
        assert_eq!(flip_cols(&arr), ndarray::array![[3, 4], [1, 2]]);
    }

    #[test]
    fn test_subarray_clips() {
        let arr = ndarray::Array2::from_shape_fn((3, 3), |(y, x)| y * 3 + x);
        assert_eq!(subarray(&arr, 1, 1, 5, 5), ndarray::array![[4, 5], [7, 8]]);
        assert_eq!(subarray(&arr, 3, 0, 1, 1).len(), 0);
    }

    #[test]
    fn test_from_flat() {
        let grid = from_flat(&[1, 0, 0, 2, 0, 0], 3, 2).unwrap();
        assert_eq!(grid, ndarray::array![[true, false, false], [true, false, false]]);
        assert!(from_flat(&[1, 0], 3, 2).is_none());
    }
}
