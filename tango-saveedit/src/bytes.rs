//! Bounds-checked little-endian (and occasionally big-endian) field access.
use byteorder::ByteOrder;

use crate::Error;

pub fn slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], Error> {
    let size = buf.len();
    offset
        .checked_add(len)
        .and_then(|end| buf.get(offset..end))
        .ok_or(Error::OutOfRange { offset, len, size })
}

pub fn slice_mut(buf: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8], Error> {
    let size = buf.len();
    offset
        .checked_add(len)
        .and_then(|end| buf.get_mut(offset..end))
        .ok_or(Error::OutOfRange { offset, len, size })
}

pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, Error> {
    Ok(slice(buf, offset, 1)?[0])
}

pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16, Error> {
    Ok(byteorder::LittleEndian::read_u16(slice(buf, offset, 2)?))
}

pub fn read_u16_be(buf: &[u8], offset: usize) -> Result<u16, Error> {
    Ok(byteorder::BigEndian::read_u16(slice(buf, offset, 2)?))
}

pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32, Error> {
    Ok(byteorder::LittleEndian::read_u32(slice(buf, offset, 4)?))
}

pub fn write_u8(buf: &mut [u8], offset: usize, v: u8) -> Result<(), Error> {
    slice_mut(buf, offset, 1)?[0] = v;
    Ok(())
}

pub fn write_u16(buf: &mut [u8], offset: usize, v: u16) -> Result<(), Error> {
    byteorder::LittleEndian::write_u16(slice_mut(buf, offset, 2)?, v);
    Ok(())
}

pub fn write_u32(buf: &mut [u8], offset: usize, v: u32) -> Result<(), Error> {
    byteorder::LittleEndian::write_u32(slice_mut(buf, offset, 4)?, v);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write() {
        let mut buf = [0u8; 8];
        write_u32(&mut buf, 0, 0x12345678).unwrap();
        write_u16(&mut buf, 4, 0xabcd).unwrap();
        assert_eq!(buf[..6], [0x78, 0x56, 0x34, 0x12, 0xcd, 0xab]);
        assert_eq!(read_u32(&buf, 0).unwrap(), 0x12345678);
        assert_eq!(read_u16(&buf, 4).unwrap(), 0xabcd);
        assert_eq!(read_u16_be(&buf, 4).unwrap(), 0xcdab);
        assert_eq!(read_u8(&buf, 5).unwrap(), 0xab);
    }

    #[test]
    fn test_out_of_range() {
        let mut buf = [0u8; 4];
        assert!(matches!(
            read_u32(&buf, 1),
            Err(Error::OutOfRange {
                offset: 1,
                len: 4,
                size: 4
            })
        ));
        assert!(write_u8(&mut buf, 4, 0).is_err());
        assert!(slice(&buf, usize::MAX, 2).is_err());
        assert_eq!(slice(&buf, 4, 0).unwrap(), &[] as &[u8]);
    }
}
