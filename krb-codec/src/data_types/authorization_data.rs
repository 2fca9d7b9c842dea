use krb_asn1::{length, DerBuf, EncodeError};

use super::{
    int_field, nested_field, octets_field, put_int_field, put_nested_field, put_octets_field,
    put_sequence, KrbEncode,
};
use crate::assigned::AuthorizationType;

/// [AuthorizationData](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.6)
///
/// ```not_rust
/// -- NOTE: AuthorizationData is always used as an OPTIONAL field and
/// -- should not be empty.
/// AuthorizationData       ::= SEQUENCE OF SEQUENCE {
///         ad-type         [0] Int32,
///         ad-data         [1] OCTET STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationDataEntry {
    pub ad_type: AuthorizationType,
    pub ad_data: Vec<u8>,
}

impl AuthorizationDataEntry {
    fn seq_len(&self) -> usize {
        int_field(self.ad_type.ordinal() as i64) + octets_field(self.ad_data.len())
    }
}

impl KrbEncode for AuthorizationDataEntry {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 0, self.ad_type.ordinal() as i64)?;
        put_octets_field(buf, 1, &self.ad_data)
    }
}

/// SEQUENCE OF [`AuthorizationDataEntry`], encoded in element order as bare
/// SEQUENCEs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationData(pub Vec<AuthorizationDataEntry>);

impl AuthorizationData {
    fn seq_len(&self) -> usize {
        self.0.iter().map(KrbEncode::compute_length).sum()
    }
}

impl KrbEncode for AuthorizationData {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        debug_log!("encode AuthorizationData ({} elements)", self.0.len());
        put_sequence(buf, self.seq_len())?;
        for entry in &self.0 {
            entry.encode(buf)?;
        }
        Ok(())
    }
}

/// [AD-AND-OR](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.6.3)
///
/// ```not_rust
/// AD-AND-OR               ::= SEQUENCE {
///         condition-count [0] Int32,
///         elements        [1] AuthorizationData
/// }
/// ```
///
/// A condition count of 1 means any one element must be satisfied; a count
/// equal to the element count means all of them must be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdAndOr {
    pub condition_count: i32,
    pub elements: Option<AuthorizationData>,
}

impl AdAndOr {
    /// Builds the disjunctive form: any one element satisfies the condition.
    pub fn or(elements: AuthorizationData) -> Self {
        Self {
            condition_count: 1,
            elements: Some(elements),
        }
    }

    /// Builds the conjunctive form: every element must be satisfied.
    pub fn and(elements: AuthorizationData) -> Self {
        Self {
            condition_count: elements.0.len() as i32,
            elements: Some(elements),
        }
    }

    fn seq_len(&self) -> usize {
        let mut seq_len = int_field(self.condition_count as i64);
        if let Some(elements) = &self.elements {
            seq_len += nested_field(elements);
        }
        seq_len
    }
}

impl KrbEncode for AdAndOr {
    fn compute_length(&self) -> usize {
        length::tlv(self.seq_len())
    }

    fn encode(&self, buf: &mut DerBuf<'_>) -> Result<(), EncodeError> {
        put_sequence(buf, self.seq_len())?;
        put_int_field(buf, 0, self.condition_count as i64)?;
        if let Some(elements) = &self.elements {
            put_nested_field(buf, 1, elements)?;
        }
        Ok(())
    }
}
