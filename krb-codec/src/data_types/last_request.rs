use krb_asn1::{length, DerBuf, EncodeError, KerberosTime};

use super::{int_field, put_int_field, put_sequence, put_time_field, time_field, KrbEncode};
use crate::assigned::LastRequestType;

/// [LastReq](https://datatracker.ietf.org/doc/html/rfc4120#section-5.4.2)
///
/// ```not_rust
/// LastReq         ::=     SEQUENCE OF SEQUENCE {
///         lr-type         [0] Int32,
///         lr-value        [1] KerberosTime
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastRequestEntry {
    pub lr_type: LastRequestType,
    pub lr_value: KerberosTime,
}

impl LastRequestEntry {
    fn seq_len(&self) -> usize {
        int_field(self.lr_type.ordinal() as i64) + time_field()
    }
}

impl KrbEncode for LastRequestEntry {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 0, self.lr_type.ordinal() as i64)?;
        put_time_field(buf, 1, &self.lr_value)
    }
}

/// SEQUENCE OF [`LastRequestEntry`], encoded in element order as bare
/// SEQUENCEs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastRequest(pub Vec<LastRequestEntry>);

impl LastRequest {
    fn seq_len(&self) -> usize {
        self.0.iter().map(KrbEncode::compute_length).sum()
    }
}

impl KrbEncode for LastRequest {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        debug_log!("encode LastRequest ({} elements)", self.0.len());
        put_sequence(buf, self.seq_len())?;
        for entry in &self.0 {
            entry.encode(buf)?;
        }
        Ok(())
    }
}
