use krb_asn1::{length, DerBuf, EncodeError};

use super::{int_field, octets_field, put_int_field, put_octets_field, put_sequence, KrbEncode};
use crate::assigned::EncryptionType;

/// [ETYPE-INFO-ENTRY](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.7.4)
///
/// ```not_rust
/// ETYPE-INFO-ENTRY        ::= SEQUENCE {
///         etype           [0] Int32,
///         salt            [1] OCTET STRING OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtypeInfoEntry {
    pub etype: EncryptionType,
    /// An empty salt is legal and encodes as a zero-length OCTET STRING,
    /// which is distinct from an absent salt.
    pub salt: Option<Vec<u8>>,
}

impl EtypeInfoEntry {
    fn seq_len(&self) -> usize {
        let mut seq_len = int_field(self.etype.ordinal() as i64);
        if let Some(salt) = &self.salt {
            seq_len += octets_field(salt.len());
        }
        seq_len
    }
}

impl KrbEncode for EtypeInfoEntry {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 0, self.etype.ordinal() as i64)?;
        if let Some(salt) = &self.salt {
            put_octets_field(buf, 1, salt)?;
        }
        Ok(())
    }
}
