use krb_asn1::{length, DerBuf, EncodeError};

use super::{int_field, octets_field, put_int_field, put_octets_field, put_sequence, KrbEncode};
use crate::assigned::EncryptionType;

/// [EncryptedData](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.9)
///
/// ```not_rust
/// EncryptedData   ::= SEQUENCE {
///         etype   [0] Int32 -- EncryptionType --,
///         kvno    [1] UInt32 OPTIONAL,
///         cipher  [2] OCTET STRING -- ciphertext
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedData {
    pub etype: EncryptionType,
    /// Key version number; emitted only when present and positive. An absent
    /// kvno omits the whole `[1]` field, it never appears as an empty TLV.
    pub kvno: Option<i32>,
    pub cipher: Vec<u8>,
}

impl EncryptedData {
    // Presence is decided here once, and used identically by both passes.
    fn kvno_field(&self) -> Option<i64> {
        self.kvno.filter(|&kvno| kvno > 0).map(i64::from)
    }

    fn seq_len(&self) -> usize {
        let mut seq_len = int_field(self.etype.ordinal() as i64);
        if let Some(kvno) = self.kvno_field() {
            seq_len += int_field(kvno);
        }
        seq_len + octets_field(self.cipher.len())
    }
}

impl KrbEncode for EncryptedData {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        debug_log!("encode EncryptedData ({})", self.etype);
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 0, self.etype.ordinal() as i64)?;
        if let Some(kvno) = self.kvno_field() {
            put_int_field(buf, 1, kvno)?;
        }
        put_octets_field(buf, 2, &self.cipher)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample(kvno: Option<i32>) -> EncryptedData {
        EncryptedData {
            etype: EncryptionType::Aes128CtsHmacSha196,
            kvno,
            cipher: vec![0xAA, 0xAA, 0xAA, 0xAA],
        }
    }

    #[test]
    fn encodes_with_key_version() {
        let data = sample(Some(5));
        let encoded = data.encode_to_vec().unwrap();

        assert_eq!(data.compute_length(), 20);
        assert_eq!(
            encoded,
            [
                0x30, 0x12, 0xA0, 0x03, 0x02, 0x01, 0x11, 0xA1, 0x03, 0x02, 0x01, 0x05, 0xA2,
                0x06, 0x04, 0x04, 0xAA, 0xAA, 0xAA, 0xAA
            ]
        );
    }

    #[test]
    fn absent_key_version_omits_the_whole_field() {
        let data = sample(None);
        let encoded = data.encode_to_vec().unwrap();

        assert_eq!(
            encoded,
            [
                0x30, 0x0D, 0xA0, 0x03, 0x02, 0x01, 0x11, 0xA2, 0x06, 0x04, 0x04, 0xAA, 0xAA,
                0xAA, 0xAA
            ]
        );
        assert!(!encoded.contains(&0xA1));
        // shorter by exactly tag + length + the wrapped INTEGER TLV
        assert_eq!(sample(Some(5)).compute_length() - data.compute_length(), 5);
    }

    #[test]
    fn non_positive_key_version_counts_as_absent() {
        assert_eq!(sample(Some(0)).encode_to_vec(), sample(None).encode_to_vec());
        assert_eq!(sample(Some(-3)).encode_to_vec(), sample(None).encode_to_vec());
    }
}
