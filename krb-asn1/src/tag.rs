use std::fmt;

/// A single BER identifier octet.
///
/// The RFC 4120 grammar only ever needs single-octet tags: the universal
/// primitives below plus constructed context-specific tags (`0xA0`..)
/// numbering the fields of each SEQUENCE. The context tag numbers are fixed
/// by the grammar's field positions, not by the emitted byte sequence.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tag(u8);

impl Tag {
    pub const INTEGER: Self = Tag(0x02);
    pub const BIT_STRING: Self = Tag(0x03);
    pub const OCTET_STRING: Self = Tag(0x04);
    pub const GENERALIZED_TIME: Self = Tag(0x18);
    pub const GENERAL_STRING: Self = Tag(0x1B);
    pub const SEQUENCE: Self = Tag(0x30);

    /// Constructed context-specific tag for field `number` of a SEQUENCE.
    #[inline]
    pub const fn context(number: u8) -> Self {
        Tag(0xA0 | number)
    }

    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_context_specific(self) -> bool {
        self.0 & 0xE0 == 0xA0
    }
}

impl From<u8> for Tag {
    fn from(tag: u8) -> Self {
        Self(tag)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::GENERALIZED_TIME => write!(f, "GeneralizedTime"),
            Tag::GENERAL_STRING => write!(f, "GeneralString"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            tag if tag.is_context_specific() => write!(f, "ContextTag{}", tag.0 & 0x1F),
            unknown => write!(f, "UNKNOWN({})", unknown.0),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({}[{}])", self, self.0)
    }
}
