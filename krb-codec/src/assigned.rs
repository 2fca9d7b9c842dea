//! Enumerated type registries from the Kerberos assigned numbers.
//!
//! Lookup by ordinal is total: an unrecognized ordinal resolves to the
//! registry's own default entry instead of an error, because downstream code
//! treats "unrecognized type" as "default type". The defaults are not
//! uniform across registries (most fall back to a null entry, host addresses
//! to IPv4, SAM types to the last-listed entry) and that per-registry
//! behavior is part of the wire-compatibility contract.

use std::fmt;

macro_rules! registry {
    (
        $(#[$meta:meta])*
        $name:ident, default $default:ident {
            $($variant:ident = $ordinal:expr, $display:expr;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every entry, in registry order.
            pub const VALUES: &'static [$name] = &[$($name::$variant,)+];

            /// The entry an unrecognized ordinal resolves to.
            pub const DEFAULT: $name = $name::$default;

            /// Wire code of this entry.
            pub fn ordinal(self) -> i32 {
                match self {
                    $($name::$variant => $ordinal,)+
                }
            }

            /// Registered name of this entry.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $display,)+
                }
            }

            /// First entry with the given wire code, or [`Self::DEFAULT`]
            /// when nothing matches. Never an error.
            pub fn from_ordinal(ordinal: i32) -> Self {
                Self::VALUES
                    .iter()
                    .copied()
                    .find(|entry| entry.ordinal() == ordinal)
                    .unwrap_or(Self::DEFAULT)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} ({})", self.name(), self.ordinal())
            }
        }
    };
}

registry! {
    //= [Assigned Numbers](https://datatracker.ietf.org/doc/html/rfc3961#section-8) =//
    EncryptionType, default Null {
        Null = 0, "NULL";
        DesCbcCrc = 1, "des-cbc-crc";
        DesCbcMd4 = 2, "des-cbc-md4";
        DesCbcMd5 = 3, "des-cbc-md5";
        Des3CbcMd5 = 5, "des3-cbc-md5";
        Des3CbcSha1 = 7, "des3-cbc-sha1";
        DsaWithSha1CmsOid = 9, "dsaWithSHA1-CmsOID";
        Md5WithRsaEncryptionCmsOid = 10, "md5WithRSAEncryption-CmsOID";
        Sha1WithRsaEncryptionCmsOid = 11, "sha1WithRSAEncryption-CmsOID";
        Rc2CbcEnvOid = 12, "rc2CBC-EnvOID";
        RsaEncryptionEnvOid = 13, "rsaEncryption-EnvOID";
        RsaEsOaepEnvOid = 14, "rsaES-OAEP-ENV-OID";
        DesEde3CbcEnvOid = 15, "des-ede3-cbc-Env-OID";
        Des3CbcSha1Kd = 16, "des3-cbc-sha1-kd";
        Aes128CtsHmacSha196 = 17, "aes128-cts-hmac-sha1-96";
        Aes256CtsHmacSha196 = 18, "aes256-cts-hmac-sha1-96";
        Rc4Hmac = 23, "rc4-hmac";
        Rc4HmacExp = 24, "rc4-hmac-exp";
    }
}

registry! {
    //= [Assigned Numbers](https://datatracker.ietf.org/doc/html/rfc3961#section-8) =//
    ChecksumType, default Null {
        Null = 0, "NULL";
        Crc32 = 1, "CRC32";
        RsaMd4 = 2, "rsa-md4";
        RsaMd4Des = 3, "rsa-md4-des";
        DesMac = 4, "des-mac";
        DesMacK = 5, "des-mac-k";
        RsaMd4DesK = 6, "rsa-md4-des-k";
        RsaMd5 = 7, "rsa-md5";
        RsaMd5Des = 8, "rsa-md5-des";
        RsaMd5Des3 = 9, "rsa-md5-des3";
        Sha1Unkeyed = 10, "sha1 (unkeyed)";
        HmacSha1Des3Kd = 12, "hmac-sha1-des3-kd";
        HmacSha1Des3 = 13, "hmac-sha1-des3";
        Sha1 = 14, "sha1 (unkeyed)";
        HmacSha196Aes128 = 15, "hmac-sha1-96-aes128";
        HmacSha196Aes256 = 16, "hmac-sha1-96-aes256";
    }
}

registry! {
    //= [Address Types](https://datatracker.ietf.org/doc/html/rfc4120#section-7.5.3) =//
    //
    // An unrecognized address type resolves to `Inet` (IPv4), not to the
    // null entry like most other registries.
    HostAddressType, default Inet {
        Null = 0, "null";
        Unix = 1, "Unix";
        Inet = 2, "Internet";
        ImpLink = 3, "Arpanet";
        Chaos = 5, "CHAOS";
        Xns = 6, "XEROX Network Services";
        Osi = 7, "OSI";
        DecNet = 12, "DECnet";
        AppleTalk = 16, "AppleTalk";
        NetBios = 20, "NetBios";
        Inet6 = 24, "Internet version 6";
    }
}

registry! {
    //= [PreAuthentication Data Types](https://datatracker.ietf.org/doc/html/rfc4120#section-7.5.2) =//
    PreAuthType, default Null {
        Null = 0, "null";
        PaTgsReq = 1, "PA-TGS-REQ";
        PaEncTimestamp = 2, "PA-ENC-TIMESTAMP";
        PaPwSalt = 3, "PA-PW-SALT";
        PaEncUnixTime = 5, "PA-ENC-UNIX-TIME";
        PaSandiaSecureid = 6, "PA-SANDIA-SECUREID";
        PaSesame = 7, "PA-SESAME";
        PaOsfDce = 8, "PA-OSF-DCE";
        PaCybersafeSecureid = 9, "PA-CYBERSAFE-SECUREID";
        PaAfs3Salt = 10, "PA-AFS3-SALT";
        PaEtypeInfo = 11, "PA-ETYPE-INFO";
        SamChallenge = 12, "SAM-CHALLENGE";
        SamResponse = 13, "SAM-RESPONSE";
        PaPkAsReq = 16, "PA-PK-AS-REQ";
        PaPkAsRep = 17, "PA-PK-AS-REP";
        PaEtypeInfo2 = 19, "PA-ETYPE-INFO2";
        PaUseSpecifiedKvno = 20, "PA-USE-SPECIFIED-KVNO";
        SamRedirect = 21, "SAM-REDIRECT";
        PaGetFromTypedData = 22, "PA-GET-FROM-TYPED-DATA";
        PaSamEtypeInfo = 23, "PA-SAM-ETYPE-INFO";
        PaPacRequest = 128, "PA-PAC-REQUEST";
    }
}

registry! {
    //= [Authorization Data Types](https://datatracker.ietf.org/doc/html/rfc4120#section-7.5.4) =//
    AuthorizationType, default Null {
        Null = 0, "null";
        AdIfRelevant = 1, "AD-IF-RELEVANT";
        AdIntendedForServer = 2, "AD-INTENDED-FOR-SERVER";
        AdIntendedForApplicationClass = 3, "AD-INTENDED-FOR-APPLICATION-CLASS";
        AdKdcIssued = 4, "AD-KDC-ISSUED";
        AdAndOr = 5, "AD-AND-OR";
        AdMandatoryTicketExtensions = 6, "AD-MANDATORY-TICKET-EXTENSIONS";
        AdInTicketExtensions = 7, "AD-IN-TICKET-EXTENSIONS";
        AdMandatoryForKdc = 8, "AD-MANDATORY-FOR-KDC";
        OsfDce = 64, "OSF-DCE";
        Sesame = 65, "SESAME";
    }
}

registry! {
    //= [LastReq](https://datatracker.ietf.org/doc/html/rfc4120#section-5.4.2) =//
    LastRequestType, default None {
        None = 0, "NONE";
        TimeOfInitialTgt = 1, "TIME_OF_INITIAL_TGT";
        TimeOfInitialReq = 2, "TIME_OF_INITIAL_REQ";
        TimeOfNewestTgt = 3, "TIME_OF_NEWEST_TGT";
        TimeOfLastRenewal = 4, "TIME_OF_LAST_RENEWAL";
        TimeOfLastReq = 5, "TIME_OF_LAST_REQ";
        TimeOfPasswordExp = 6, "TIME_OF_PASSWORD_EXP";
    }
}

registry! {
    // Single-use authentication mechanism types. The trailing Apache entry
    // doubles as the fallback for unknown ordinals; every other registry
    // falls back to an early null-like entry.
    SamType, default PaSamTypeApache {
        PaSamTypeEnigma = 1, "Enigma Logic";
        PaSamTypeDigiPath = 2, "Digital Pathways";
        PaSamTypeSkey1 = 3, "S/key where KDC has key 0";
        PaSamTypeSkey = 4, "Traditional S/Key";
        PaSamTypeSecurid = 5, "Security Dynamics";
        PaSamTypeCryptocard = 6, "CRYPTOCard";
        PaSamTypeApache = 7, "Apache Software Foundation";
    }
}

registry! {
    //= [TransitedEncoding](https://datatracker.ietf.org/doc/html/rfc4120#section-3.3.3.2) =//
    TransitedEncodingType, default Null {
        Null = 0, "null";
        DomainX500Compress = 1, "Domain X500 Compress";
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lookup_finds_exact_ordinal_match() {
        assert_eq!(EncryptionType::from_ordinal(17), EncryptionType::Aes128CtsHmacSha196);
        assert_eq!(ChecksumType::from_ordinal(3), ChecksumType::RsaMd4Des);
        assert_eq!(HostAddressType::from_ordinal(24), HostAddressType::Inet6);
        assert_eq!(PreAuthType::from_ordinal(128), PreAuthType::PaPacRequest);
        assert_eq!(LastRequestType::from_ordinal(6), LastRequestType::TimeOfPasswordExp);
    }

    #[test]
    fn unknown_ordinals_resolve_to_the_per_registry_default() {
        assert_eq!(EncryptionType::from_ordinal(999), EncryptionType::Null);
        assert_eq!(ChecksumType::from_ordinal(-7), ChecksumType::Null);
        assert_eq!(AuthorizationType::from_ordinal(42), AuthorizationType::Null);
        assert_eq!(TransitedEncodingType::from_ordinal(3), TransitedEncodingType::Null);
        assert_eq!(LastRequestType::from_ordinal(100), LastRequestType::None);
        // the odd ones out, preserved on purpose
        assert_eq!(HostAddressType::from_ordinal(99), HostAddressType::Inet);
        assert_eq!(SamType::from_ordinal(0), SamType::PaSamTypeApache);
    }

    #[test]
    fn ordinal_round_trip_over_every_entry() {
        for entry in EncryptionType::VALUES {
            assert_eq!(EncryptionType::from_ordinal(entry.ordinal()), *entry);
        }
        for entry in SamType::VALUES {
            assert_eq!(SamType::from_ordinal(entry.ordinal()), *entry);
        }
        for entry in HostAddressType::VALUES {
            assert_eq!(HostAddressType::from_ordinal(entry.ordinal()), *entry);
        }
    }

    #[test]
    fn display_shows_name_and_ordinal() {
        assert_eq!(EncryptionType::DesCbcMd5.to_string(), "des-cbc-md5 (3)");
        assert_eq!(SamType::PaSamTypeApache.to_string(), "Apache Software Foundation (7)");
    }
}
