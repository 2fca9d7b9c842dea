//! Sequential writer over a caller-supplied destination buffer.

use crate::error::EncodeError;
use crate::length::{self, Length};
use crate::tag::Tag;
use crate::time::KerberosTime;

/// Write cursor over a pre-sized destination buffer.
///
/// The codec writes sequentially from the current position and never resizes
/// the slice. A write that would run past the end fails with
/// [`EncodeError::BufferTooSmall`] before touching the buffer, and the
/// surrounding encode aborts at that point with no partial-write recovery.
pub struct DerBuf<'a> {
    bytes: &'a mut [u8],
    pos: usize,
}

impl<'a> DerBuf<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Octets written so far.
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Octets still available.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn check(&self, needed: usize) -> Result<(), EncodeError> {
        if needed > self.remaining() {
            Err(EncodeError::BufferTooSmall {
                needed,
                remaining: self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    pub fn put_u8(&mut self, octet: u8) -> Result<(), EncodeError> {
        self.check(1)?;
        self.bytes[self.pos] = octet;
        self.pos += 1;
        Ok(())
    }

    pub fn put_slice(&mut self, slice: &[u8]) -> Result<(), EncodeError> {
        self.check(slice.len())?;
        self.bytes[self.pos..self.pos + slice.len()].copy_from_slice(slice);
        self.pos += slice.len();
        Ok(())
    }

    pub fn put_tag(&mut self, tag: Tag) -> Result<(), EncodeError> {
        self.put_u8(tag.number())
    }

    pub fn put_length(&mut self, len: usize) -> Result<(), EncodeError> {
        Length::serialize(len, self)
    }

    /// Universal INTEGER TLV, minimal two's-complement big-endian content.
    ///
    /// The content width matches [`length::integer_content_len`] octet for
    /// octet.
    pub fn put_integer(&mut self, value: i64) -> Result<(), EncodeError> {
        let content = length::integer_content_len(value);
        self.put_tag(Tag::INTEGER)?;
        self.put_length(content)?;
        for shift in (0..content).rev() {
            self.put_u8((value >> (shift * 8)) as u8)?;
        }
        Ok(())
    }

    /// Universal OCTET STRING TLV; zero-length content is legal and distinct
    /// from an absent optional field.
    pub fn put_octet_string(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.put_tag(Tag::OCTET_STRING)?;
        self.put_length(bytes.len())?;
        self.put_slice(bytes)
    }

    /// GeneralString TLV, the encoding of Kerberos `Realm` and
    /// `KerberosString`.
    pub fn put_general_string(&mut self, value: &str) -> Result<(), EncodeError> {
        self.put_tag(Tag::GENERAL_STRING)?;
        self.put_length(value.len())?;
        self.put_slice(value.as_bytes())
    }

    /// GeneralizedTime TLV, always exactly 15 content octets.
    pub fn put_generalized_time(&mut self, time: &KerberosTime) -> Result<(), EncodeError> {
        self.put_tag(Tag::GENERALIZED_TIME)?;
        self.put_length(15)?;
        self.put_slice(&time.to_generalized_time())
    }

    /// BIT STRING TLV: unused-bits octet, then the content octets.
    pub fn put_bit_string(&mut self, unused: u8, bytes: &[u8]) -> Result<(), EncodeError> {
        self.put_tag(Tag::BIT_STRING)?;
        self.put_length(bytes.len() + 1)?;
        self.put_u8(unused)?;
        self.put_slice(bytes)
    }
}
