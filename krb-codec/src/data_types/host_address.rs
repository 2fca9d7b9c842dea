use krb_asn1::{length, DerBuf, EncodeError};

use super::{int_field, octets_field, put_int_field, put_octets_field, put_sequence, KrbEncode};
use crate::assigned::HostAddressType;

/// [HostAddress](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.5)
///
/// ```not_rust
/// HostAddress     ::= SEQUENCE {
///         addr-type       [0] Int32,
///         address         [1] OCTET STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAddress {
    pub addr_type: HostAddressType,
    pub address: Vec<u8>,
}

impl HostAddress {
    fn seq_len(&self) -> usize {
        int_field(self.addr_type.ordinal() as i64) + octets_field(self.address.len())
    }
}

impl KrbEncode for HostAddress {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 0, self.addr_type.ordinal() as i64)?;
        put_octets_field(buf, 1, &self.address)
    }
}

/// [HostAddresses](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.5)
///
/// ```not_rust
/// HostAddresses   -- NOTE: subtly different from rfc1510,
///                 -- but has a value mapping and encodes the same
///         ::= SEQUENCE OF HostAddress
/// ```
///
/// Elements are encoded in order as bare SEQUENCEs; no per-element context
/// tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostAddresses(pub Vec<HostAddress>);

impl HostAddresses {
    fn seq_len(&self) -> usize {
        self.0.iter().map(KrbEncode::compute_length).sum()
    }
}

impl KrbEncode for HostAddresses {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        debug_log!("encode HostAddresses ({} elements)", self.0.len());
        put_sequence(buf, self.seq_len())?;
        for address in &self.0 {
            address.encode(buf)?;
        }
        Ok(())
    }
}
