//! Encode Kerberos RFC 4120 wire structures as ASN.1 BER/DER.
//!
//! The directory/session layer hands this crate populated message values and
//! a sized buffer; it gets back either a fully written buffer or an
//! [`EncodeError`]. Every structure follows the two-pass protocol: a
//! bottom-up [`KrbEncode::compute_length`] pass over every nested field, then
//! a top-down [`KrbEncode::encode`] pass that reproduces exactly the widths
//! the first pass computed.

#[macro_use]
mod debug_log;

pub mod assigned;
pub mod constants;
pub mod data_types;
pub mod flags;

pub use data_types::KrbEncode;
pub use krb_asn1::{length, DerBuf, EncodeError, KerberosTime, Tag};
