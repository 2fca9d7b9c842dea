//! RFC 4120 wire structures and the two-pass length/encode protocol.
//!
//! BER/DER length fields are variable width, so the exact byte size of every
//! nested structure has to be known before a single tag octet is written.
//! Every structure here therefore computes its full encoded size bottom-up
//! from its field values ([`KrbEncode::compute_length`]), then writes
//! top-down ([`KrbEncode::encode`]) reproducing exactly the widths the first
//! pass computed. Both passes derive every length from the same pure
//! functions over the same field values, so the octet count written always
//! equals the computed length; optional-field presence is decided by a
//! single predicate used identically by both passes.

mod authorization_data;
mod checksum;
mod encrypted_data;
mod encryption_key;
mod etype_info_entry;
mod host_address;
mod krb_cred_info;
mod last_request;
mod pa_data;
mod pa_enc_ts_enc;
mod principal_name;
mod transited_encoding;

pub use authorization_data::{AdAndOr, AuthorizationData, AuthorizationDataEntry};
pub use checksum::Checksum;
pub use encrypted_data::EncryptedData;
pub use encryption_key::EncryptionKey;
pub use etype_info_entry::EtypeInfoEntry;
pub use host_address::{HostAddress, HostAddresses};
pub use krb_cred_info::KrbCredInfo;
pub use last_request::{LastRequest, LastRequestEntry};
pub use pa_data::PreAuthenticationData;
pub use pa_enc_ts_enc::PaEncTsEnc;
pub use principal_name::PrincipalName;
pub use transited_encoding::TransitedEncoding;

use krb_asn1::{length, DerBuf, EncodeError, KerberosTime, Tag};

use crate::flags::KerberosFlags;

/// The two-pass encoding protocol every Kerberos wire structure implements.
pub trait KrbEncode {
    /// Size of the complete encoding, own SEQUENCE tag and length prefix
    /// included.
    fn compute_length(&self) -> usize;

    /// Writes the encoding into `buf`.
    ///
    /// The octet count written equals [`compute_length`] on the same value,
    /// or the encode aborts with an error at the failing write.
    ///
    /// [`compute_length`]: Self::compute_length
    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError>;

    /// Encodes into a freshly allocated buffer sized from
    /// [`compute_length`](Self::compute_length).
    fn encode_to_vec(&self) -> Result<Vec<u8>, EncodeError> {
        let computed = self.compute_length();
        let mut out = vec![0u8; computed];
        let mut buf = DerBuf::new(&mut out);
        self.encode(&mut buf)?;
        debug_assert_eq!(buf.written(), computed);
        Ok(out)
    }
}

impl<T: KrbEncode> KrbEncode for &T {
    fn compute_length(&self) -> usize {
        (*self).compute_length()
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        (*self).encode(buf)
    }
}

/// Writes the SEQUENCE header of a structure with `seq_len` content octets.
pub(crate) fn put_sequence(buf: &mut DerBuf<'_>, seq_len: usize) -> Result<(), EncodeError> {
    buf.put_tag(Tag::SEQUENCE)?;
    buf.put_length(seq_len)
}

/// Writes the header of context field `number` wrapping `inner_len` octets.
pub(crate) fn put_field(buf: &mut DerBuf<'_>, number: u8, inner_len: usize) -> Result<(), EncodeError> {
    buf.put_tag(Tag::context(number))?;
    buf.put_length(inner_len)
}

// One width function and one writer per field shape, so each structure is a
// direct transcription of its ASN.1 grammar. The widths below are always
// context tag + length + the wrapped universal TLV.

pub(crate) fn int_field(value: i64) -> usize {
    length::tlv(length::integer(value))
}

pub(crate) fn put_int_field(buf: &mut DerBuf<'_>, number: u8, value: i64) -> Result<(), EncodeError> {
    put_field(buf, number, length::integer(value))?;
    buf.put_integer(value)
}

pub(crate) fn octets_field(len: usize) -> usize {
    length::tlv(length::octet_string(len))
}

pub(crate) fn put_octets_field(buf: &mut DerBuf<'_>, number: u8, bytes: &[u8]) -> Result<(), EncodeError> {
    put_field(buf, number, length::octet_string(bytes.len()))?;
    buf.put_octet_string(bytes)
}

pub(crate) fn string_field(value: &str) -> usize {
    length::tlv(length::general_string(value.len()))
}

pub(crate) fn put_string_field(buf: &mut DerBuf<'_>, number: u8, value: &str) -> Result<(), EncodeError> {
    put_field(buf, number, length::general_string(value.len()))?;
    buf.put_general_string(value)
}

pub(crate) fn time_field() -> usize {
    length::tlv(length::generalized_time())
}

pub(crate) fn put_time_field(buf: &mut DerBuf<'_>, number: u8, time: &KerberosTime) -> Result<(), EncodeError> {
    put_field(buf, number, length::generalized_time())?;
    buf.put_generalized_time(time)
}

pub(crate) fn flags_field(flags: &KerberosFlags) -> usize {
    length::tlv(flags.encoded_len())
}

pub(crate) fn put_flags_field(buf: &mut DerBuf<'_>, number: u8, flags: &KerberosFlags) -> Result<(), EncodeError> {
    put_field(buf, number, flags.encoded_len())?;
    flags.write(buf)
}

pub(crate) fn nested_field<T: KrbEncode>(value: &T) -> usize {
    length::tlv(value.compute_length())
}

pub(crate) fn put_nested_field<T: KrbEncode>(
    buf: &mut DerBuf<'_>,
    number: u8,
    value: &T,
) -> Result<(), EncodeError> {
    put_field(buf, number, value.compute_length())?;
    value.encode(buf)
}
