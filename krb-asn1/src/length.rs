//! Length-of-length and integer-width arithmetic for the two-pass protocol.
//!
//! The first pass of every composite encode computes byte counts bottom-up
//! with these functions; the writer reproduces exactly the widths computed
//! here, which is what keeps the two passes consistent.

use crate::error::EncodeError;
use crate::writer::DerBuf;

/// BER length field arithmetic.
pub struct Length;

impl Length {
    /// Number of octets the length field itself occupies: 1 in short form
    /// (`len <= 127`), otherwise one length-of-length octet plus the minimal
    /// big-endian encoding of `len`.
    pub fn encoded_len(len: usize) -> usize {
        if len <= 127 {
            1
        } else {
            1 + Self::content_octets(len)
        }
    }

    fn content_octets(len: usize) -> usize {
        let mut octets = 1;
        let mut remaining = len >> 8;
        while remaining > 0 {
            octets += 1;
            remaining >>= 8;
        }
        octets
    }

    /// Writes the length field. Zero is legal short form `0x00`.
    pub fn serialize(len: usize, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        if len <= 127 {
            buf.put_u8(len as u8)
        } else {
            let octets = Self::content_octets(len);
            buf.put_u8(0x80 | octets as u8)?;
            for shift in (0..octets).rev() {
                buf.put_u8((len >> (shift * 8)) as u8)?;
            }
            Ok(())
        }
    }
}

/// Minimal two's-complement width of an INTEGER's content octets.
///
/// At least 1, with one extra octet whenever the top content bit would
/// otherwise contradict the sign.
pub fn integer_content_len(value: i64) -> usize {
    let mut len = 1;
    let mut v = value;
    while !(-128..=127).contains(&v) {
        len += 1;
        v >>= 8;
    }
    len
}

/// Full TLV width of a value whose content occupies `content` octets.
pub fn tlv(content: usize) -> usize {
    1 + Length::encoded_len(content) + content
}

/// Full TLV width of a universal INTEGER.
pub fn integer(value: i64) -> usize {
    tlv(integer_content_len(value))
}

/// Full TLV width of an OCTET STRING with `len` content octets.
pub fn octet_string(len: usize) -> usize {
    tlv(len)
}

/// Full TLV width of a GeneralString with `len` content octets.
pub fn general_string(len: usize) -> usize {
    tlv(len)
}

/// Full TLV width of a GeneralizedTime, always `yyyyMMddHHmmssZ`.
pub fn generalized_time() -> usize {
    tlv(15)
}

/// Full TLV width of a BIT STRING with `content` data octets; the
/// unused-bits octet is accounted for here.
pub fn bit_string(content: usize) -> usize {
    tlv(content + 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn short_and_long_form_boundaries() {
        assert_eq!(Length::encoded_len(0), 1);
        assert_eq!(Length::encoded_len(127), 1);
        assert_eq!(Length::encoded_len(128), 2);
        assert_eq!(Length::encoded_len(255), 2);
        assert_eq!(Length::encoded_len(256), 3);
        assert_eq!(Length::encoded_len(65535), 3);
        assert_eq!(Length::encoded_len(65536), 4);
    }

    #[test]
    fn serialized_length_octets() {
        let mut raw = [0u8; 8];

        let mut buf = DerBuf::new(&mut raw);
        Length::serialize(0, &mut buf).unwrap();
        Length::serialize(127, &mut buf).unwrap();
        assert_eq!(&raw[..2], &[0x00, 0x7F]);

        let mut buf = DerBuf::new(&mut raw);
        Length::serialize(128, &mut buf).unwrap();
        Length::serialize(0x1234, &mut buf).unwrap();
        assert_eq!(&raw[..5], &[0x81, 0x80, 0x82, 0x12, 0x34]);
    }

    #[test]
    fn integer_widths_are_minimal_and_signed() {
        assert_eq!(integer_content_len(0), 1);
        assert_eq!(integer_content_len(127), 1);
        assert_eq!(integer_content_len(128), 2);
        assert_eq!(integer_content_len(-128), 1);
        assert_eq!(integer_content_len(-129), 2);
        assert_eq!(integer_content_len(0x7FFF), 2);
        assert_eq!(integer_content_len(0x8000), 3);
        assert_eq!(integer_content_len(i64::MAX), 8);
        assert_eq!(integer_content_len(i64::MIN), 8);
    }

    #[test]
    fn tlv_width_includes_tag_and_length() {
        assert_eq!(tlv(0), 2);
        assert_eq!(tlv(127), 129);
        assert_eq!(tlv(128), 131);
        assert_eq!(integer(3), 3);
        assert_eq!(octet_string(2), 4);
        assert_eq!(generalized_time(), 17);
        assert_eq!(bit_string(4), 7);
    }
}
