use byteorder::ReadBytesExt;

use crate::Error;

/// Decompresses the GBA BIOS flavor of LZ77.
pub fn decompress(mut r: &[u8]) -> Result<Vec<u8>, Error> {
    let header = r.read_u32::<byteorder::LittleEndian>()?;
    if (header & 0xff) != 0x10 {
        return Err(Error::format(format!("invalid lz77 header: {:08x}", header)));
    }

    let n = (header >> 8) as usize;
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let flags = r.read_u8()?;

        for i in 0..8 {
            if out.len() >= n {
                break;
            }

            if (flags & (0x80 >> i)) == 0 {
                out.push(r.read_u8()?);
                continue;
            }

            // Yes that's right, it's big endian here!
            let info = r.read_u16::<byteorder::BigEndian>()?;

            let len = (info >> 12) as usize + 3;
            let offset = (info & 0x0fff) as usize + 1;

            if offset > out.len() {
                return Err(Error::format(format!(
                    "lz77 back-reference of {} bytes with only {} bytes decoded",
                    offset,
                    out.len()
                )));
            }

            for _ in 0..len {
                out.push(out[out.len() - offset]);
            }
        }
    }

    out.truncate(n);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        let buf = [0x10, 0x05, 0x00, 0x00, 0x00, b'h', b'e', b'l', b'l', b'o', 0xaa, 0xbb];
        assert_eq!(decompress(&buf).unwrap(), b"hello");
    }

    #[test]
    fn test_overlapping_back_reference() {
        // "ab" then copy 6 bytes from 2 back: "abababab".
        let buf = [0x10, 0x08, 0x00, 0x00, 0x20, b'a', b'b', 0x30, 0x01];
        assert_eq!(decompress(&buf).unwrap(), b"abababab");
    }

    #[test]
    fn test_truncates_to_length() {
        // The back-reference produces 3 bytes but only 2 more are wanted.
        let buf = [0x10, 0x03, 0x00, 0x00, 0x40, b'x', 0x00, 0x00];
        assert_eq!(decompress(&buf).unwrap(), b"xxx");

        let buf = [0x10, 0x01, 0x00, 0x00, 0x00, b'x', b'y'];
        assert_eq!(decompress(&buf).unwrap(), b"x");
    }

    #[test]
    fn test_bad_header() {
        assert!(matches!(
            decompress(&[0x11, 0x05, 0x00, 0x00, 0x00, 1, 2, 3, 4, 5]),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_truncated_input() {
        assert!(matches!(
            decompress(&[0x10, 0x05, 0x00, 0x00, 0x00, 1, 2]),
            Err(Error::Format(_))
        ));
        assert!(matches!(decompress(&[0x10, 0x05]), Err(Error::Format(_))));
    }

    #[test]
    fn test_reference_before_start() {
        assert!(matches!(
            decompress(&[0x10, 0x05, 0x00, 0x00, 0x80, 0x00, 0x00]),
            Err(Error::Format(_))
        ));
    }
}
