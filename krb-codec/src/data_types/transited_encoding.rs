use krb_asn1::{length, DerBuf, EncodeError};

use super::{int_field, octets_field, put_int_field, put_octets_field, put_sequence, KrbEncode};
use crate::assigned::TransitedEncodingType;

/// [TransitedEncoding](https://datatracker.ietf.org/doc/html/rfc4120#section-5.3)
///
/// The realms a cross-realm ticket has passed through, in compressed form.
///
/// ```not_rust
/// TransitedEncoding       ::= SEQUENCE {
///         tr-type         [0] Int32 -- must be registered --,
///         contents        [1] OCTET STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitedEncoding {
    pub tr_type: TransitedEncodingType,
    pub contents: Vec<u8>,
}

impl TransitedEncoding {
    fn seq_len(&self) -> usize {
        int_field(self.tr_type.ordinal() as i64) + octets_field(self.contents.len())
    }
}

impl KrbEncode for TransitedEncoding {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 0, self.tr_type.ordinal() as i64)?;
        put_octets_field(buf, 1, &self.contents)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn encodes_compressed_realm_path() {
        let transited = TransitedEncoding {
            tr_type: TransitedEncodingType::DomainX500Compress,
            contents: b"EXAMPLE.COM,".to_vec(),
        };

        let encoded = transited.encode_to_vec().unwrap();

        assert_eq!(transited.compute_length(), 23);
        assert_eq!(&encoded[..9], &[0x30, 0x15, 0xA0, 0x03, 0x02, 0x01, 0x01, 0xA1, 0x0E]);
        assert_eq!(&encoded[9..11], &[0x04, 0x0C]);
        assert_eq!(&encoded[11..], b"EXAMPLE.COM,");
    }

    #[test]
    fn empty_path_is_a_zero_length_octet_string() {
        let transited = TransitedEncoding {
            tr_type: TransitedEncodingType::Null,
            contents: Vec::new(),
        };

        assert_eq!(
            transited.encode_to_vec().unwrap(),
            [0x30, 0x09, 0xA0, 0x03, 0x02, 0x01, 0x00, 0xA1, 0x02, 0x04, 0x00]
        );
    }
}
