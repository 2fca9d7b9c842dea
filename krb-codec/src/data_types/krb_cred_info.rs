use krb_asn1::{length, DerBuf, EncodeError, KerberosTime};

use super::{
    flags_field, nested_field, put_flags_field, put_nested_field, put_sequence, put_string_field,
    put_time_field, string_field, time_field, EncryptionKey, HostAddresses, KrbEncode,
    PrincipalName,
};
use crate::flags::TicketFlags;

/// [KrbCredInfo](https://datatracker.ietf.org/doc/html/rfc4120#section-5.8.1)
///
/// One ticket's worth of session state inside a KRB-CRED message. Only the
/// key is mandatory; every other field mirrors an EncTicketPart field and is
/// carried only when known.
///
/// ```not_rust
/// KrbCredInfo     ::= SEQUENCE {
///         key             [0] EncryptionKey,
///         prealm          [1] Realm OPTIONAL,
///         pname           [2] PrincipalName OPTIONAL,
///         flags           [3] TicketFlags OPTIONAL,
///         authtime        [4] KerberosTime OPTIONAL,
///         starttime       [5] KerberosTime OPTIONAL,
///         endtime         [6] KerberosTime OPTIONAL,
///         renew-till      [7] KerberosTime OPTIONAL,
///         srealm          [8] Realm OPTIONAL,
///         sname           [9] PrincipalName OPTIONAL,
///         caddr           [10] HostAddresses OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KrbCredInfo {
    pub key: EncryptionKey,
    pub prealm: Option<String>,
    pub pname: Option<PrincipalName>,
    pub flags: Option<TicketFlags>,
    pub authtime: Option<KerberosTime>,
    pub starttime: Option<KerberosTime>,
    pub endtime: Option<KerberosTime>,
    pub renew_till: Option<KerberosTime>,
    pub srealm: Option<String>,
    pub sname: Option<PrincipalName>,
    pub caddr: Option<HostAddresses>,
}

impl KrbCredInfo {
    /// A cred-info carrying nothing but the session key.
    pub fn new(key: EncryptionKey) -> Self {
        Self {
            key,
            prealm: None,
            pname: None,
            flags: None,
            authtime: None,
            starttime: None,
            endtime: None,
            renew_till: None,
            srealm: None,
            sname: None,
            caddr: None,
        }
    }

    fn seq_len(&self) -> usize {
        let mut seq_len = nested_field(&self.key);
        if let Some(prealm) = &self.prealm {
            seq_len += string_field(prealm);
        }
        if let Some(pname) = &self.pname {
            seq_len += nested_field(pname);
        }
        if let Some(flags) = &self.flags {
            seq_len += flags_field(flags);
        }
        for time in [&self.authtime, &self.starttime, &self.endtime, &self.renew_till] {
            if time.is_some() {
                seq_len += time_field();
            }
        }
        if let Some(srealm) = &self.srealm {
            seq_len += string_field(srealm);
        }
        if let Some(sname) = &self.sname {
            seq_len += nested_field(sname);
        }
        if let Some(caddr) = &self.caddr {
            seq_len += nested_field(caddr);
        }
        seq_len
    }
}

impl KrbEncode for KrbCredInfo {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        debug_log!("encode KrbCredInfo");
        put_sequence(buf, self.seq_len())?;
        put_nested_field(buf, 0, &self.key)?;
        if let Some(prealm) = &self.prealm {
            put_string_field(buf, 1, prealm)?;
        }
        if let Some(pname) = &self.pname {
            put_nested_field(buf, 2, pname)?;
        }
        if let Some(flags) = &self.flags {
            put_flags_field(buf, 3, flags)?;
        }
        if let Some(authtime) = &self.authtime {
            put_time_field(buf, 4, authtime)?;
        }
        if let Some(starttime) = &self.starttime {
            put_time_field(buf, 5, starttime)?;
        }
        if let Some(endtime) = &self.endtime {
            put_time_field(buf, 6, endtime)?;
        }
        if let Some(renew_till) = &self.renew_till {
            put_time_field(buf, 7, renew_till)?;
        }
        if let Some(srealm) = &self.srealm {
            put_string_field(buf, 8, srealm)?;
        }
        if let Some(sname) = &self.sname {
            put_nested_field(buf, 9, sname)?;
        }
        if let Some(caddr) = &self.caddr {
            put_nested_field(buf, 10, caddr)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::HostAddress;
    use super::*;
    use crate::assigned::{EncryptionType, HostAddressType};
    use crate::flags::ticket_flags;

    fn session_key() -> EncryptionKey {
        EncryptionKey {
            key_type: EncryptionType::Aes256CtsHmacSha196,
            key_value: vec![0x11; 4],
        }
    }

    #[test]
    fn key_only_form_is_the_minimal_encoding() {
        let info = KrbCredInfo::new(session_key());

        assert_eq!(
            info.encode_to_vec().unwrap(),
            [
                0x30, 0x11, 0xA0, 0x0F, 0x30, 0x0D, 0xA0, 0x03, 0x02, 0x01, 0x12, 0xA1, 0x06,
                0x04, 0x04, 0x11, 0x11, 0x11, 0x11
            ]
        );
    }

    #[test]
    fn optional_fields_keep_their_fixed_tag_numbers() {
        let mut flags = TicketFlags::new();
        flags.set(ticket_flags::FORWARDABLE);

        let mut info = KrbCredInfo::new(session_key());
        info.flags = Some(flags);
        info.endtime = KerberosTime::new(2023, 4, 15, 10, 30, 0);
        info.srealm = Some("EXAMPLE.COM".to_owned());
        info.caddr = Some(HostAddresses(vec![HostAddress {
            addr_type: HostAddressType::Inet,
            address: vec![192, 168, 0, 1],
        }]));

        let encoded = info.encode_to_vec().unwrap();

        assert_eq!(info.compute_length(), 81);
        assert_eq!(&encoded[..2], &[0x30, 0x4F]);
        // key keeps tag [0] in front of the skipped prealm/pname
        assert_eq!(&encoded[2..4], &[0xA0, 0x0F]);
        // flags jump straight to [3]
        assert_eq!(
            &encoded[19..28],
            &[0xA3, 0x07, 0x03, 0x05, 0x00, 0x00, 0x00, 0x00, 0x02]
        );
        // endtime at [6], with [4] and [5] absent
        assert_eq!(&encoded[28..32], &[0xA6, 0x11, 0x18, 0x0F]);
        assert_eq!(&encoded[32..47], b"20230415103000Z");
        // srealm at [8]
        assert_eq!(&encoded[47..51], &[0xA8, 0x0D, 0x1B, 0x0B]);
        assert_eq!(&encoded[51..62], b"EXAMPLE.COM");
        // caddr at [10]
        assert_eq!(&encoded[62..66], &[0xAA, 0x11, 0x30, 0x0F]);
        assert_eq!(&encoded[66..68], &[0x30, 0x0D]);
    }
}
