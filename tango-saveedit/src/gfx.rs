use crate::{bytes, Error};

pub type Palette = [image::Rgba<u8>; 16];

type PalettedImage = image::ImageBuffer<image::Luma<u8>, Vec<u8>>;

pub const TILE_WIDTH: usize = 8;
pub const TILE_HEIGHT: usize = 8;
pub const TILE_BYTES: usize = TILE_WIDTH * TILE_HEIGHT / 2;

pub fn bgr555_to_rgba(c: u16) -> image::Rgba<u8> {
    let expand = |v: u16| ((v & 0b11111) * 0xff / 0b11111) as u8;
    image::Rgba([expand(c), expand(c >> 5), expand(c >> 10), 0xff])
}

/// Reads 16 BGR555 colors. Every entry is opaque: transparency of index 0 is applied when tiles are colored.
pub fn read_palette(raw: &[u8]) -> Result<Palette, Error> {
    let mut palette = [image::Rgba([0, 0, 0, 0]); 16];
    for (i, c) in palette.iter_mut().enumerate() {
        *c = bgr555_to_rgba(bytes::read_u16(raw, i * 2)?);
    }
    Ok(palette)
}

pub fn read_tile(raw: &[u8]) -> Result<PalettedImage, Error> {
    image::ImageBuffer::from_vec(
        TILE_WIDTH as u32,
        TILE_HEIGHT as u32,
        bytes::slice(raw, 0, TILE_BYTES)?
            .iter()
            .flat_map(|v| [v & 0xf, v >> 4])
            .collect(),
    )
    .ok_or_else(|| Error::format("tile buffer too small"))
}

pub fn merge_tiles(tiles: &[PalettedImage], cols: usize) -> PalettedImage {
    let rows = tiles.len() / cols.max(1);
    let mut img = image::ImageBuffer::new((cols * TILE_WIDTH) as u32, (rows * TILE_HEIGHT) as u32);
    for (i, tile) in tiles.iter().enumerate() {
        let x = i % cols;
        let y = i / cols;
        image::imageops::replace(&mut img, tile, (x * TILE_WIDTH) as i64, (y * TILE_HEIGHT) as i64);
    }
    img
}

pub fn apply_palette(paletted: PalettedImage, palette: &Palette) -> image::RgbaImage {
    let (width, height) = paletted.dimensions();
    image::ImageBuffer::from_fn(width, height, |x, y| match paletted.get_pixel(x, y).0[0] {
        0 => image::Rgba([0, 0, 0, 0]),
        v => palette[(v & 0xf) as usize],
    })
}

/// Decodes a `cols` by `rows` block of 4bpp tiles stored one tile after another.
pub fn read_tiles(raw: &[u8], cols: usize, rows: usize, palette: &Palette) -> Result<image::RgbaImage, Error> {
    let raw = bytes::slice(raw, 0, cols * rows * TILE_BYTES)?;
    let tiles = raw.chunks(TILE_BYTES).map(read_tile).collect::<Result<Vec<_>, _>>()?;
    Ok(apply_palette(merge_tiles(&tiles, cols), palette))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bgr555() {
        assert_eq!(bgr555_to_rgba(0x7fff), image::Rgba([0xff, 0xff, 0xff, 0xff]));
        assert_eq!(bgr555_to_rgba(0x001f), image::Rgba([0xff, 0, 0, 0xff]));
        assert_eq!(bgr555_to_rgba(0x03e0), image::Rgba([0, 0xff, 0, 0xff]));
        assert_eq!(bgr555_to_rgba(0x7c00), image::Rgba([0, 0, 0xff, 0xff]));
        // 16 * 255 / 31 = 131
        assert_eq!(bgr555_to_rgba(0x0010), image::Rgba([131, 0, 0, 0xff]));
    }

    #[test]
    fn test_read_palette() {
        let mut raw = [0u8; 32];
        raw[2] = 0x1f;
        let palette = read_palette(&raw).unwrap();
        assert_eq!(palette[0], image::Rgba([0, 0, 0, 0xff]));
        assert_eq!(palette[1], image::Rgba([0xff, 0, 0, 0xff]));
        assert!(read_palette(&raw[..31]).is_err());
    }

    #[test]
    fn test_read_tiles() {
        let mut palette = [image::Rgba([0, 0, 0, 0xff]); 16];
        palette[1] = image::Rgba([1, 1, 1, 0xff]);
        palette[2] = image::Rgba([2, 2, 2, 0xff]);

        // Two tiles side by side: the first has pixel (0, 0) = 1 and (1, 0) = 2, the second is all 1s.
        let mut raw = vec![0u8; TILE_BYTES * 2];
        raw[0] = 0x21;
        for b in &mut raw[TILE_BYTES..] {
            *b = 0x11;
        }

        let img = read_tiles(&raw, 2, 1, &palette).unwrap();
        assert_eq!(img.dimensions(), (16, 8));
        assert_eq!(*img.get_pixel(0, 0), palette[1]);
        assert_eq!(*img.get_pixel(1, 0), palette[2]);
        assert_eq!(*img.get_pixel(2, 0), image::Rgba([0, 0, 0, 0]));
        assert_eq!(*img.get_pixel(8, 7), palette[1]);
        assert_eq!(*img.get_pixel(15, 0), palette[1]);
    }

    #[test]
    fn test_read_tiles_too_small() {
        let palette = [image::Rgba([0, 0, 0, 0xff]); 16];
        assert!(matches!(
            read_tiles(&[0u8; TILE_BYTES * 3], 2, 2, &palette),
            Err(Error::OutOfRange { .. })
        ));
    }
}
