use krb_asn1::{length, DerBuf, EncodeError};

use super::{int_field, octets_field, put_int_field, put_octets_field, put_sequence, KrbEncode};
use crate::assigned::ChecksumType;

/// [Checksum](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.9)
///
/// ```not_rust
/// Checksum        ::= SEQUENCE {
///         cksumtype       [0] Int32,
///         checksum        [1] OCTET STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    pub cksum_type: ChecksumType,
    pub checksum: Vec<u8>,
}

impl Checksum {
    fn seq_len(&self) -> usize {
        int_field(self.cksum_type.ordinal() as i64) + octets_field(self.checksum.len())
    }
}

impl KrbEncode for Checksum {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 0, self.cksum_type.ordinal() as i64)?;
        put_octets_field(buf, 1, &self.checksum)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn encodes_both_mandatory_fields() {
        let checksum = Checksum {
            cksum_type: ChecksumType::RsaMd4Des,
            checksum: vec![0x01, 0x02],
        };

        let encoded = checksum.encode_to_vec().unwrap();

        assert_eq!(checksum.compute_length(), 13);
        assert_eq!(
            encoded,
            [0x30, 0x0B, 0xA0, 0x03, 0x02, 0x01, 0x03, 0xA1, 0x04, 0x04, 0x02, 0x01, 0x02]
        );
    }

    #[test]
    fn long_form_lengths_propagate_to_every_enclosing_header() {
        let checksum = Checksum {
            cksum_type: ChecksumType::HmacSha196Aes256,
            checksum: vec![0xAB; 200],
        };

        let encoded = checksum.encode_to_vec().unwrap();

        // 200-octet content forces long-form lengths on the OCTET STRING,
        // the context field and the outer SEQUENCE
        assert_eq!(checksum.compute_length(), 214);
        assert_eq!(encoded.len(), 214);
        assert_eq!(&encoded[..9], &[0x30, 0x81, 0xD3, 0xA0, 0x03, 0x02, 0x01, 0x10, 0xA1]);
        assert_eq!(&encoded[9..13], &[0x81, 0xCB, 0x04, 0x81]);
        assert_eq!(encoded[13], 0xC8);
        assert_eq!(&encoded[14..], vec![0xAB; 200]);
    }

    #[test]
    fn empty_checksum_bytes_still_emit_the_field() {
        let checksum = Checksum {
            cksum_type: ChecksumType::Crc32,
            checksum: Vec::new(),
        };

        let encoded = checksum.encode_to_vec().unwrap();

        assert_eq!(
            encoded,
            [0x30, 0x09, 0xA0, 0x03, 0x02, 0x01, 0x01, 0xA1, 0x02, 0x04, 0x00]
        );
    }
}
