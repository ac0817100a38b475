use std::fmt;
use std::net::Ipv4Addr;

// https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.2
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RecordType {
    A,
    Ns,
    Cname,
    Mx,
    Unknown(u16),
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::Ns,
            5 => RecordType::Cname,
            15 => RecordType::Mx,
            other => RecordType::Unknown(other),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            RecordType::A => "A",
            RecordType::Ns => "NS",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            // 未知类型没有助记符
            RecordType::Unknown(_) => "",
        };
        write!(f, "{}", s)
    }
}

// https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.4
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RecordClass {
    In,
    Cs,
    Ch,
    Hs,
    Unknown(u16),
}

impl From<u16> for RecordClass {
    fn from(code: u16) -> Self {
        match code {
            1 => RecordClass::In,
            2 => RecordClass::Cs,
            3 => RecordClass::Ch,
            4 => RecordClass::Hs,
            other => RecordClass::Unknown(other),
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            RecordClass::In => "IN",
            RecordClass::Cs => "CS",
            RecordClass::Ch => "CH",
            RecordClass::Hs => "HS",
            RecordClass::Unknown(_) => "",
        };
        write!(f, "{}", s)
    }
}

pub type Name = String;

/// The resolved A record of one queried domain.
///
/// `name` is the domain as it was asked for, not as it came back on the wire.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Answer {
    name: Name,
    address: Ipv4Addr,
    ttl: u32,
    record_type: RecordType,
    record_class: RecordClass,
}

impl Answer {
    pub fn new(
        name: &str,
        address: Ipv4Addr,
        ttl: u32,
        record_type: RecordType,
        record_class: RecordClass,
    ) -> Self {
        Self {
            name: Name::from(name),
            address,
            ttl,
            record_type,
            record_class,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn record_class(&self) -> RecordClass {
        self.record_class
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "The IP address for {} is {} \t TTL: {}s \t type: {} \t class: {}",
            self.name, self.address, self.ttl, self.record_type, self.record_class
        )
    }
}
