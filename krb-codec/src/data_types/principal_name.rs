use krb_asn1::{length, DerBuf, EncodeError};

use super::{int_field, put_field, put_int_field, put_sequence, KrbEncode};

/// [PrincipalName](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.2)
///
/// ```not_rust
/// PrincipalName   ::= SEQUENCE {
///         name-type       [0] Int32,
///         name-string     [1] SEQUENCE OF KerberosString
/// }
/// ```
///
/// `name_type` values come from [`crate::constants::name_types`]. The
/// name-string field wraps an inner SEQUENCE OF GeneralString, so a
/// principal with no components still carries an empty inner SEQUENCE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalName {
    pub name_type: i32,
    pub name_string: Vec<String>,
}

impl PrincipalName {
    fn names_seq_len(&self) -> usize {
        self.name_string
            .iter()
            .map(|component| length::general_string(component.len()))
            .sum()
    }

    fn seq_len(&self) -> usize {
        int_field(self.name_type as i64) + length::tlv(length::tlv(self.names_seq_len()))
    }
}

impl KrbEncode for PrincipalName {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 0, self.name_type as i64)?;
        let names_seq_len = self.names_seq_len();
        put_field(buf, 1, length::tlv(names_seq_len))?;
        put_sequence(buf, names_seq_len)?;
        for component in &self.name_string {
            buf.put_general_string(component)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constants::name_types;

    #[test]
    fn encodes_a_service_principal() {
        let principal = PrincipalName {
            name_type: name_types::NT_PRINCIPAL,
            name_string: vec!["krbtgt".to_owned(), "EXAMPLE.COM".to_owned()],
        };

        let encoded = principal.encode_to_vec().unwrap();

        assert_eq!(principal.compute_length(), 32);
        assert_eq!(&encoded[..9], &[0x30, 0x1E, 0xA0, 0x03, 0x02, 0x01, 0x01, 0xA1, 0x17]);
        assert_eq!(&encoded[9..11], &[0x30, 0x15]);
        assert_eq!(&encoded[11..13], &[0x1B, 0x06]);
        assert_eq!(&encoded[13..19], b"krbtgt");
        assert_eq!(&encoded[19..21], &[0x1B, 0x0B]);
        assert_eq!(&encoded[21..], b"EXAMPLE.COM");
    }

    #[test]
    fn no_components_still_emits_the_inner_sequence() {
        let principal = PrincipalName {
            name_type: name_types::NT_UNKNOWN,
            name_string: Vec::new(),
        };

        assert_eq!(
            principal.encode_to_vec().unwrap(),
            [0x30, 0x09, 0xA0, 0x03, 0x02, 0x01, 0x00, 0xA1, 0x02, 0x30, 0x00]
        );
    }
}
