//! Big-endian field helpers.
//!
//! All functions index into the slice directly and panic if it is shorter
//! than the field; callers slice fixed-size regions they already hold.

/// Read a 24-bit big-endian unsigned integer.
pub fn get_u24(b: &[u8]) -> u32 {
    u32::from(b[0]) << 16 | u32::from(b[1]) << 8 | u32::from(b[2])
}

/// Write the low 24 bits of `v` big-endian.
pub fn put_u24(b: &mut [u8], v: u32) {
    b[..3].copy_from_slice(&v.to_be_bytes()[1..]);
}

/// Read a 32-bit big-endian unsigned integer.
pub fn get_u32(b: &[u8]) -> u32 {
    u32::from_be_bytes([b[0], b[1], b[2], b[3]])
}

/// Write `v` as a 32-bit big-endian integer.
pub fn put_u32(b: &mut [u8], v: u32) {
    b[..4].copy_from_slice(&v.to_be_bytes());
}

/// Read an FLV timestamp in milliseconds.
///
/// The field is a 24-bit big-endian value followed by an extension byte
/// holding bits 24..32.
pub fn get_timestamp(b: &[u8]) -> u32 {
    get_u24(b) | u32::from(b[3]) << 24
}

/// Write an FLV timestamp, the inverse of [`get_timestamp`].
pub fn put_timestamp(b: &mut [u8], v: u32) {
    put_u24(b, v);
    b[3] = (v >> 24) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u24() {
        assert_eq!(get_u24(&[0x00, 0x00, 0x05]), 5);
        assert_eq!(get_u24(&[0x12, 0x34, 0x56, 0xFF]), 0x12_3456);

        let mut b = [0u8; 3];
        put_u24(&mut b, 0xAB_CDEF);
        assert_eq!(b, [0xAB, 0xCD, 0xEF]);
    }

    #[test]
    fn test_put_u24_drops_high_byte() {
        let mut b = [0u8; 3];
        put_u24(&mut b, 0x7F00_0001);
        assert_eq!(b, [0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_u32() {
        assert_eq!(get_u32(&[0, 0, 0, 9]), 9);

        let mut b = [0u8; 4];
        put_u32(&mut b, 0xDEAD_BEEF);
        assert_eq!(b, [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(get_u32(&b), 0xDEAD_BEEF);
    }

    #[test]
    fn test_timestamp_extension_byte_is_high_order() {
        assert_eq!(get_timestamp(&[0, 0, 0, 0]), 0);
        assert_eq!(get_timestamp(&[0x00, 0x03, 0xE8, 0x00]), 1000);
        assert_eq!(get_timestamp(&[0x00, 0x00, 0x01, 0x01]), 0x0100_0001);

        let mut b = [0u8; 4];
        put_timestamp(&mut b, 0x8012_3456);
        assert_eq!(b, [0x12, 0x34, 0x56, 0x80]);
    }

    #[test]
    fn test_timestamp_round_trip() {
        for v in [0, 1, 33, 0xFF_FFFF, 0x100_0000, 0x7FFF_FFFF, u32::MAX] {
            let mut b = [0u8; 4];
            put_timestamp(&mut b, v);
            assert_eq!(get_timestamp(&b), v);
        }
    }

    #[test]
    #[should_panic]
    fn test_short_slice_panics() {
        get_timestamp(&[1, 2, 3]);
    }
}
