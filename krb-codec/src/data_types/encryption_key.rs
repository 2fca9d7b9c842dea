use krb_asn1::{length, DerBuf, EncodeError};

use super::{int_field, octets_field, put_int_field, put_octets_field, put_sequence, KrbEncode};
use crate::assigned::EncryptionType;

/// [EncryptionKey](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.9)
///
/// ```not_rust
/// EncryptionKey   ::= SEQUENCE {
///         keytype         [0] Int32 -- actually encryption type --,
///         keyvalue        [1] OCTET STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionKey {
    pub key_type: EncryptionType,
    pub key_value: Vec<u8>,
}

impl EncryptionKey {
    fn seq_len(&self) -> usize {
        int_field(self.key_type.ordinal() as i64) + octets_field(self.key_value.len())
    }
}

impl KrbEncode for EncryptionKey {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 0, self.key_type.ordinal() as i64)?;
        put_octets_field(buf, 1, &self.key_value)
    }
}
