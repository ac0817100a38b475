use crate::error::EncodeError;
use crate::header::Header;
use crate::question::Question;

pub struct RequestMessage<'a> {
    header: Header,
    question: Question<'a>,
}

impl<'a> RequestMessage<'a> {
    pub fn new(id: u16, domain: &'a str) -> Self {
        let header = Header::query(id);
        let question = Question::a_record(domain);

        Self { header, question }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<(), EncodeError> {
        self.header.to_bytes(bytes)?;
        self.question.to_bytes(bytes)?;

        Ok(())
    }
}
