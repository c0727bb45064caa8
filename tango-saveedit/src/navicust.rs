use crate::{array2d, rom, Error};

/// One installed program, as stored in a save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub id: usize,
    pub variant: usize,
    pub col: u8,
    pub row: u8,
    pub rot: u8,
    pub compressed: bool,
}

pub type MaterializedNavicust = ndarray::Array2<Option<usize>>;

fn ncp_bitmap(info: &rom::NavicustPart, compressed: bool, rot: u8) -> rom::NavicustBitmap {
    array2d::rotate(
        if compressed {
            &info.compressed_bitmap
        } else {
            &info.uncompressed_bitmap
        },
        rot as usize,
    )
    .into_owned()
}

/// Reads a stored tile grid, where each byte is a placement index plus one and zero is empty.
pub fn materialized_from_wram(buf: &[u8], size: [usize; 2]) -> Result<MaterializedNavicust, Error> {
    let [height, width] = size;
    let buf = buf.get(..height * width).ok_or(Error::OutOfRange {
        offset: 0,
        len: height * width,
        size: buf.len(),
    })?;
    ndarray::Array2::from_shape_vec(size, buf.iter().map(|v| v.checked_sub(1).map(|v| v as usize)).collect())
        .map_err(|e| Error::format(e.to_string()))
}

/// The inverse of [`materialized_from_wram`]. Indexes that do not fit in a byte are stored as empty.
pub fn materialized_to_wram(materialized: &MaterializedNavicust) -> Vec<u8> {
    materialized
        .iter()
        .map(|v| v.and_then(|v| u8::try_from(v + 1).ok()).unwrap_or(0))
        .collect()
}

/// Projects placements onto a `size` grid. Later placements overwrite earlier ones and cells that fall outside the
/// grid are dropped.
pub fn materialize(
    placements: &[Option<Placement>],
    size: [usize; 2],
    assets: &rom::Assets,
) -> MaterializedNavicust {
    let mut materialized = ndarray::Array2::from_elem(size, None);
    for (i, placement) in placements.iter().enumerate() {
        let placement = if let Some(placement) = placement {
            placement
        } else {
            continue;
        };

        let info = if let Some(info) = assets.navicust_part(placement.id, placement.variant) {
            info
        } else {
            log::warn!(
                "navicust part {}:{} at index {} is not in the rom",
                placement.id,
                placement.variant,
                i
            );
            continue;
        };

        let bitmap = ncp_bitmap(info, placement.compressed, placement.rot);
        let (bitmap_height, bitmap_width) = bitmap.dim();
        let ncp_y = (placement.row as isize) - bitmap_height as isize / 2;
        let ncp_x = (placement.col as isize) - bitmap_width as isize / 2;

        let (src_y, dst_y) = if ncp_y < 0 {
            (-ncp_y as usize, 0)
        } else {
            (0, ncp_y as usize)
        };

        let (src_x, dst_x) = if ncp_x < 0 {
            (-ncp_x as usize, 0)
        } else {
            (0, ncp_x as usize)
        };

        if src_y >= bitmap_height || src_x >= bitmap_width || dst_y >= size[0] || dst_x >= size[1] {
            continue;
        }

        for (src_row, dst_row) in std::iter::zip(
            bitmap.slice(ndarray::s![src_y.., src_x..]).rows(),
            materialized.slice_mut(ndarray::s![dst_y.., dst_x..]).rows_mut(),
        ) {
            for (src, dst) in std::iter::zip(src_row, dst_row) {
                if *src {
                    *dst = Some(i);
                }
            }
        }
    }
    materialized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> rom::Assets {
        let part = |uncompressed: rom::NavicustBitmap, compressed: rom::NavicustBitmap| {
            Some(rom::NavicustPart {
                name: String::new(),
                color: Some(rom::NavicustPartColor::White),
                is_solid: true,
                compressed_bitmap: compressed,
                uncompressed_bitmap: uncompressed,
            })
        };

        let empty = ndarray::Array2::from_elem((5, 5), false);
        let mut bar = empty.clone();
        bar[[2, 1]] = true;
        bar[[2, 2]] = true;
        bar[[2, 3]] = true;
        let mut dot = empty.clone();
        dot[[2, 2]] = true;
        let mut corner = empty;
        corner[[0, 0]] = true;

        rom::Assets {
            navicust_parts: vec![
                part(bar.clone(), dot.clone()),
                part(dot.clone(), dot),
                part(corner.clone(), corner),
                part(bar.clone(), bar),
            ],
            navicust_part_variants: 2,
            ..Default::default()
        }
    }

    fn placement(id: usize, variant: usize, row: u8, col: u8, rot: u8, compressed: bool) -> Option<Placement> {
        Some(Placement {
            id,
            variant,
            col,
            row,
            rot,
            compressed,
        })
    }

    #[test]
    fn test_materialize_single() {
        let materialized = materialize(&[placement(0, 0, 2, 2, 0, false)], [5, 5], &assets());
        for ((y, x), v) in materialized.indexed_iter() {
            assert_eq!(*v, if y == 2 && (1..=3).contains(&x) { Some(0) } else { None });
        }
    }

    #[test]
    fn test_materialize_rotated_and_compressed() {
        let materialized = materialize(&[placement(0, 0, 2, 2, 1, false)], [5, 5], &assets());
        for ((y, x), v) in materialized.indexed_iter() {
            assert_eq!(*v, if x == 2 && (1..=3).contains(&y) { Some(0) } else { None });
        }

        let materialized = materialize(&[placement(0, 0, 2, 2, 0, true)], [5, 5], &assets());
        assert_eq!(materialized.iter().filter(|v| v.is_some()).count(), 1);
        assert_eq!(materialized[[2, 2]], Some(0));
    }

    #[test]
    fn test_materialize_later_overwrites() {
        let materialized = materialize(
            &[placement(0, 0, 2, 2, 0, false), None, placement(0, 1, 2, 3, 0, false)],
            [5, 5],
            &assets(),
        );
        assert_eq!(materialized[[2, 1]], Some(0));
        assert_eq!(materialized[[2, 2]], Some(0));
        assert_eq!(materialized[[2, 3]], Some(2));
    }

    #[test]
    fn test_materialize_clips() {
        // A bar centered on the left edge loses its first cell.
        let materialized = materialize(&[placement(0, 0, 0, 0, 0, false)], [5, 5], &assets());
        assert_eq!(materialized[[0, 0]], Some(0));
        assert_eq!(materialized[[0, 1]], Some(0));
        assert_eq!(materialized.iter().filter(|v| v.is_some()).count(), 2);

        // The corner cell lands at (row - 2, col - 2), off the grid.
        let materialized = materialize(&[placement(1, 0, 1, 1, 0, false)], [5, 5], &assets());
        assert!(materialized.iter().all(|v| v.is_none()));

        // Entirely past the bottom right.
        let materialized = materialize(&[placement(0, 0, 9, 9, 0, false)], [5, 5], &assets());
        assert!(materialized.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_materialize_unknown_part() {
        let materialized = materialize(&[placement(7, 0, 2, 2, 0, false)], [5, 5], &assets());
        assert!(materialized.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_wram_roundtrip() {
        let materialized = materialize(&[placement(0, 0, 2, 2, 0, false)], [5, 5], &assets());
        let wram = materialized_to_wram(&materialized);
        assert_eq!(wram.len(), 25);
        assert_eq!(&wram[10..15], &[0, 1, 1, 1, 0]);
        assert_eq!(materialized_from_wram(&wram, [5, 5]).unwrap(), materialized);
        assert!(materialized_from_wram(&wram[..24], [5, 5]).is_err());
    }
}
