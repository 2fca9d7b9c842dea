//! ASN.1 BER/DER TLV primitives for the Kerberos wire codec.
//!
//! Everything Kerberos-grammar-specific (registries, option sets, message
//! structures) lives in `krb-codec`; this crate only knows how to write tags,
//! lengths and universal primitive values into a caller-supplied buffer, plus
//! the [`KerberosTime`] calendar value whose wire form is a fixed 15-octet
//! GeneralizedTime string.

pub mod error;
pub mod length;
pub mod tag;
pub mod time;
pub mod writer;

pub use error::EncodeError;
pub use tag::Tag;
pub use time::KerberosTime;
pub use writer::DerBuf;
