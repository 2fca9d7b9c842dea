//! The Kerberos timestamp value.

/// A Kerberos timestamp: UTC calendar fields with second precision.
///
/// The wire form is always the 15-octet GeneralizedTime string
/// `yyyyMMddHHmmssZ`; fractional seconds travel in separate microsecond
/// fields (`pausec` and friends), never inside the time string itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KerberosTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl KerberosTime {
    /// Create a new timestamp without validation.
    ///
    /// # Safety
    ///
    /// You have to make sure you're not building an invalid date.
    pub unsafe fn new_unchecked(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> KerberosTime {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Option<KerberosTime> {
        if (1..=12).contains(&month)
            && (1..=31).contains(&day)
            && year <= 9999
            && hour < 24
            && minute < 60
            && second < 60
        {
            Some(Self {
                year,
                month,
                day,
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Packs the `yyyyMMddHHmmssZ` content octets.
    pub fn to_generalized_time(&self) -> [u8; 15] {
        let mut encoded = [
            0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30,
            0x5A,
        ];

        encoded[0] |= (self.year / 1000) as u8;
        encoded[1] |= ((self.year % 1000) / 100) as u8;
        encoded[2] |= ((self.year % 100) / 10) as u8;
        encoded[3] |= (self.year % 10) as u8;
        encoded[4] |= self.month / 10;
        encoded[5] |= self.month % 10;
        encoded[6] |= self.day / 10;
        encoded[7] |= self.day % 10;
        encoded[8] |= self.hour / 10;
        encoded[9] |= self.hour % 10;
        encoded[10] |= self.minute / 10;
        encoded[11] |= self.minute % 10;
        encoded[12] |= self.second / 10;
        encoded[13] |= self.second % 10;

        encoded
    }

    /// Exact inverse of [`to_generalized_time`](Self::to_generalized_time):
    /// 15 octets, ASCII digits, trailing `Z`.
    pub fn from_generalized_time(v: &[u8]) -> Option<KerberosTime> {
        if v.len() != 15 || v[14] != b'Z' || !v[..14].iter().all(u8::is_ascii_digit) {
            return None;
        }

        let digit = |idx: usize| (v[idx] & 0x0F) as u16;
        let merged = |idx: usize| (v[idx] & 0x0F) * 10 + (v[idx + 1] & 0x0F);

        let year = digit(0) * 1000 + digit(1) * 100 + digit(2) * 10 + digit(3);
        Self::new(year, merged(4), merged(6), merged(8), merged(10), merged(12))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::KerberosTime;

    #[test]
    fn generalized_time_round_trip() {
        let time = KerberosTime::new(2023, 12, 31, 23, 59, 59).unwrap();
        let encoded = time.to_generalized_time();
        assert_eq!(&encoded, b"20231231235959Z");
        assert_eq!(KerberosTime::from_generalized_time(&encoded), Some(time));
    }

    #[test]
    fn rejects_malformed_time_strings() {
        assert_eq!(KerberosTime::from_generalized_time(b"20230415103000"), None);
        assert_eq!(KerberosTime::from_generalized_time(b"2023041510300xZ"), None);
        // month 13
        assert_eq!(KerberosTime::from_generalized_time(b"20231315103000Z"), None);
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(KerberosTime::new(2023, 0, 1, 0, 0, 0).is_none());
        assert!(KerberosTime::new(2023, 1, 32, 0, 0, 0).is_none());
        assert!(KerberosTime::new(2023, 1, 1, 24, 0, 0).is_none());
        assert!(KerberosTime::new(2023, 1, 1, 0, 0, 60).is_none());
    }
}
