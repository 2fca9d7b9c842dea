use krb_asn1::{length, DerBuf, EncodeError};

use super::{int_field, octets_field, put_int_field, put_octets_field, put_sequence, KrbEncode};
use crate::assigned::PreAuthType;

/// [PA-DATA](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.7)
///
/// ```not_rust
/// PA-DATA         ::= SEQUENCE {
///         -- NOTE: first tag is [1], not [0]
///         padata-type     [1] Int32,
///         padata-value    [2] OCTET STRING -- might be encoded AP-REQ
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreAuthenticationData {
    pub padata_type: PreAuthType,
    pub padata_value: Vec<u8>,
}

impl PreAuthenticationData {
    fn seq_len(&self) -> usize {
        int_field(self.padata_type.ordinal() as i64) + octets_field(self.padata_value.len())
    }
}

impl KrbEncode for PreAuthenticationData {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 1, self.padata_type.ordinal() as i64)?;
        put_octets_field(buf, 2, &self.padata_value)
    }
}
