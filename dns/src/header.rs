use byteorder::{WriteBytesExt, BE};

pub const HEADER_LEN: usize = 12;

// 12 bytes
#[derive(Debug)]
pub struct Header {
    id: u16, // 随机数字，由调用方提供
    flags: u16,
    qdcount: u16, // question 数量，固定为 1
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

impl Header {
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: 0x0100, // rd = 1, rd 设置为 1 启用服务端的递归查询，只需一次请求即可返回地址
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> std::io::Result<()> {
        bytes.write_u16::<BE>(self.id)?;
        bytes.write_u16::<BE>(self.flags)?;
        bytes.write_u16::<BE>(self.qdcount)?;
        bytes.write_u16::<BE>(self.ancount)?;
        bytes.write_u16::<BE>(self.nscount)?;
        bytes.write_u16::<BE>(self.arcount)?;

        Ok(())
    }
}
