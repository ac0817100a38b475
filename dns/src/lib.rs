// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1

mod decode;
mod error;
mod header;
mod question;
mod request_message;
mod utils;

pub use decode::{DecodeResponse, FixedOffsetDecoder};
pub use error::{DecodeError, EncodeError};
pub use header::HEADER_LEN;

/// Builds a single-question A/IN query for `domain` with transaction ID `id`.
pub fn encode_request(id: u16, domain: &str) -> Result<Vec<u8>, EncodeError> {
    let request_msg = request_message::RequestMessage::new(id, domain);
    let mut request_bytes: Vec<u8> = vec![];
    request_msg.to_bytes(&mut request_bytes)?;

    Ok(request_bytes)
}
