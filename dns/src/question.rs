use crate::error::EncodeError;
use crate::utils::domain_to_qname;
use byteorder::{WriteBytesExt, BE};

const QTYPE_A: u16 = 1;
const QCLASS_IN: u16 = 1;

#[derive(Debug)]
pub struct Question<'a> {
    domain: &'a str,
    qtype: u16,
    qclass: u16,
}

impl<'a> Question<'a> {
    pub fn a_record(domain: &'a str) -> Self {
        Self {
            domain,
            qtype: QTYPE_A,
            qclass: QCLASS_IN,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<(), EncodeError> {
        let qname = domain_to_qname(self.domain)?;
        bytes.extend_from_slice(&qname);

        bytes.write_u16::<BE>(self.qtype)?;
        bytes.write_u16::<BE>(self.qclass)?;

        Ok(())
    }
}
