use crate::error::DecodeError;
use byteorder::{ByteOrder, BE};
use domain_name_query_types::{Answer, RecordClass, RecordType};
use std::net::Ipv4Addr;

/// Turns a raw response datagram into an [`Answer`] for `domain`.
pub trait DecodeResponse {
    fn decode(&self, response: &[u8], domain: &str) -> Result<Answer, DecodeError>;
}

/// Reads the last resource record of a response at fixed offsets from the end
/// of the datagram.
///
/// Only correct when the response ends with a single A record whose owner
/// name is a 2-byte compression pointer:
///
/// ```text
/// ... | TYPE (2) | CLASS (2) | TTL (4) | RDLENGTH (2) | RDATA (4) |
///      n-14       n-12        n-10      n-6            n-4        n
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedOffsetDecoder;

impl FixedOffsetDecoder {
    pub const MIN_RESPONSE_LEN: usize = 14;
}

impl DecodeResponse for FixedOffsetDecoder {
    fn decode(&self, response: &[u8], domain: &str) -> Result<Answer, DecodeError> {
        let n = response.len();
        if n < Self::MIN_RESPONSE_LEN {
            return Err(DecodeError::TooShort {
                len: n,
                min: Self::MIN_RESPONSE_LEN,
            });
        }

        let rtype = BE::read_u16(&response[n - 14..n - 12]);
        let rclass = BE::read_u16(&response[n - 12..n - 10]);
        let ttl = BE::read_u32(&response[n - 10..n - 6]);
        let rdata = &response[n - 4..];
        let address = Ipv4Addr::new(rdata[0], rdata[1], rdata[2], rdata[3]);

        let answer = Answer::new(
            domain,
            address,
            ttl,
            RecordType::from(rtype),
            RecordClass::from(rclass),
        );
        tracing::debug!("decoded {} byte response: {:?}", n, answer);

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // type A, class IN, ttl 60, rdlength 4, 192.0.2.1
    const TAIL: [u8; 14] = [0, 1, 0, 1, 0, 0, 0, 60, 0, 4, 192, 0, 2, 1];

    #[test]
    fn decodes_fields_from_the_tail() {
        let answer = FixedOffsetDecoder.decode(&TAIL, "example.com").unwrap();

        assert_eq!("example.com", answer.name());
        assert_eq!(Ipv4Addr::new(192, 0, 2, 1), answer.address());
        assert_eq!(60, answer.ttl());
        assert_eq!(RecordType::A, answer.record_type());
        assert_eq!(RecordClass::In, answer.record_class());
        assert_eq!("A", answer.record_type().to_string());
        assert_eq!("IN", answer.record_class().to_string());
    }

    #[test]
    fn ignores_leading_bytes() {
        let mut response = vec![0xaa; 40];
        response.extend_from_slice(&TAIL);

        let answer = FixedOffsetDecoder.decode(&response, "example.com").unwrap();
        assert_eq!(Ipv4Addr::new(192, 0, 2, 1), answer.address());
        assert_eq!(60, answer.ttl());
    }

    #[test]
    fn short_response_is_an_error() {
        for len in 0..FixedOffsetDecoder::MIN_RESPONSE_LEN {
            let ret = FixedOffsetDecoder.decode(&TAIL[..len], "example.com");
            assert_eq!(Err(DecodeError::TooShort { len, min: 14 }), ret);
        }
    }

    #[test]
    fn unknown_type_is_tolerated() {
        let mut response = TAIL;
        response[1] = 99;

        let answer = FixedOffsetDecoder.decode(&response, "example.com").unwrap();
        assert_eq!(RecordType::Unknown(99), answer.record_type());
        assert_eq!("", answer.record_type().to_string());
    }

    #[test]
    fn ttl_uses_all_four_bytes() {
        let mut response = TAIL;
        response[4..8].copy_from_slice(&[0x00, 0x01, 0x51, 0x80]);

        let answer = FixedOffsetDecoder.decode(&response, "example.com").unwrap();
        assert_eq!(86400, answer.ttl());
    }
}
