//! Kerberos bit-flag option sets: `KDCOptions`, `APOptions`, `TicketFlags`.

use byteorder::{BigEndian, ByteOrder};
use krb_asn1::{length, DerBuf, EncodeError};

/// Number of flag positions in every RFC 4120 option set.
pub const MAX_SIZE: usize = 32;

/// Fixed-width boolean vector with the Kerberos BIT STRING bit order.
///
/// The packed form reverses the logical index end to end
/// (`reverse_position(i) = MAX_SIZE - 1 - i`) before standard MSB-first
/// placement: logical bit `i` lands in octet `MAX_SIZE/8 - 1 - i/8` at
/// in-octet position `i % 8`, so bit 0 ends up in the last octet's low bit
/// and bit 31 in the first octet's high bit. This is neither little- nor
/// big-endian packing of the unreversed vector. Unpacking applies the exact
/// inverse, so `from_bytes(flags.to_bytes())` reproduces the vector bit for
/// bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KerberosFlags {
    // bit significance == logical index, which is what makes the reversed
    // placement collapse to one big-endian word store
    bits: u32,
}

pub type ApOptions = KerberosFlags;
pub type KdcOptions = KerberosFlags;
pub type TicketFlags = KerberosFlags;

impl KerberosFlags {
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Rebuilds the vector from its packed wire form.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            bits: BigEndian::read_u32(&bytes),
        }
    }

    pub fn is_set(&self, index: usize) -> bool {
        index < MAX_SIZE && self.bits & (1 << index) != 0
    }

    pub fn set(&mut self, index: usize) {
        if index < MAX_SIZE {
            self.bits |= 1 << index;
        }
    }

    pub fn clear(&mut self, index: usize) {
        if index < MAX_SIZE {
            self.bits &= !(1 << index);
        }
    }

    /// Packs the vector into `MAX_SIZE / 8` octets with the reversed bit
    /// ordering described on the type.
    pub fn to_bytes(&self) -> [u8; 4] {
        let mut bytes = [0u8; 4];
        BigEndian::write_u32(&mut bytes, self.bits);
        bytes
    }

    /// TLV width of the BIT STRING form.
    pub fn encoded_len(&self) -> usize {
        length::bit_string(4)
    }

    /// Encodes the set as a BIT STRING TLV: one unused-bits octet, then the
    /// four packed octets.
    pub fn write(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        buf.put_bit_string(0, &self.to_bytes())
    }
}

pub mod ap_options {
    //= [KRB_AP_REQ Definition](https://datatracker.ietf.org/doc/html/rfc4120#section-5.5.1) =//
    pub const RESERVED: usize = 0;
    pub const USE_SESSION_KEY: usize = 1;
    pub const MUTUAL_REQUIRED: usize = 2;
}

pub mod kdc_options {
    //= [KRB_KDC_REQ Definition](https://datatracker.ietf.org/doc/html/rfc4120#section-5.4.1) =//
    pub const RESERVED: usize = 0;
    pub const FORWARDABLE: usize = 1;
    pub const FORWARDED: usize = 2;
    pub const PROXIABLE: usize = 3;
    pub const PROXY: usize = 4;
    pub const ALLOW_POSTDATE: usize = 5;
    pub const POSTDATED: usize = 6;
    pub const UNUSED7: usize = 7;
    pub const RENEWABLE: usize = 8;
    pub const UNUSED9: usize = 9;
    pub const UNUSED10: usize = 10;
    pub const UNUSED11: usize = 11;
    pub const DISABLE_TRANSITED_CHECK: usize = 26;
    pub const RENEWABLE_OK: usize = 27;
    pub const ENC_TKT_IN_SKEY: usize = 28;
    pub const RENEW: usize = 30;
    pub const VALIDATE: usize = 31;
}

pub mod ticket_flags {
    //= [Ticket Flags](https://datatracker.ietf.org/doc/html/rfc4120#section-5.3) =//
    pub const RESERVED: usize = 0;
    pub const FORWARDABLE: usize = 1;
    pub const FORWARDED: usize = 2;
    pub const PROXIABLE: usize = 3;
    pub const PROXY: usize = 4;
    pub const MAY_POSTDATE: usize = 5;
    pub const POSTDATED: usize = 6;
    pub const INVALID: usize = 7;
    pub const RENEWABLE: usize = 8;
    pub const INITIAL: usize = 9;
    pub const PRE_AUTHENT: usize = 10;
    pub const HW_AUTHENT: usize = 11;
    pub const TRANSITED_POLICY_CHECKED: usize = 12;
    pub const OK_AS_DELEGATE: usize = 13;
}
