use krb_asn1::{length, DerBuf, EncodeError, KerberosTime};

use super::{int_field, put_int_field, put_sequence, put_time_field, time_field, KrbEncode};

/// [PA-ENC-TS-ENC](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.7.2)
///
/// The decrypted content of the encrypted-timestamp pre-authentication
/// blob.
///
/// ```not_rust
/// PA-ENC-TS-ENC           ::= SEQUENCE {
///         patimestamp     [0] KerberosTime -- client's time --,
///         pausec          [1] Microseconds OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaEncTsEnc {
    pub patimestamp: KerberosTime,
    pub pausec: Option<i32>,
}

impl PaEncTsEnc {
    fn seq_len(&self) -> usize {
        let mut seq_len = time_field();
        if let Some(pausec) = self.pausec {
            seq_len += int_field(pausec as i64);
        }
        seq_len
    }
}

impl KrbEncode for PaEncTsEnc {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_time_field(buf, 0, &self.patimestamp)?;
        if let Some(pausec) = self.pausec {
            put_int_field(buf, 1, pausec as i64)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ts() -> KerberosTime {
        KerberosTime::new(2023, 4, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn encodes_timestamp_and_microseconds() {
        let enc_ts = PaEncTsEnc {
            patimestamp: ts(),
            pausec: Some(123_456),
        };

        let encoded = enc_ts.encode_to_vec().unwrap();

        assert_eq!(enc_ts.compute_length(), 28);
        assert_eq!(&encoded[..4], &[0x30, 0x1A, 0xA0, 0x11]);
        assert_eq!(&encoded[4..6], &[0x18, 0x0F]);
        assert_eq!(&encoded[6..21], b"20230415103000Z");
        assert_eq!(&encoded[21..], &[0xA1, 0x05, 0x02, 0x03, 0x01, 0xE2, 0x40]);
    }

    #[test]
    fn microseconds_are_optional() {
        let enc_ts = PaEncTsEnc {
            patimestamp: ts(),
            pausec: None,
        };

        let encoded = enc_ts.encode_to_vec().unwrap();

        assert_eq!(encoded.len(), 21);
        assert_eq!(&encoded[..4], &[0x30, 0x13, 0xA0, 0x11]);
        assert!(!encoded.contains(&0xA1));
    }
}
