use crate::Endpoint;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

pub const DEFAULT_ALIAS: &str = "Xray_Server";

/// Characters left untouched in the link label, as URI component quoting does.
const ALIAS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// A `vless://` share link. Query parameters keep a fixed order.
pub struct VlessLink<'a> {
    endpoint: &'a Endpoint,
    alias: &'a str,
}

impl<'a> VlessLink<'a> {
    pub fn new(endpoint: &'a Endpoint, alias: &'a str) -> Self {
        Self { endpoint, alias }
    }
}

impl fmt::Display for VlessLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.endpoint;
        write!(f, "vless://{}@{}:{}", e.uuid, e.address, e.port)?;
        write!(
            f,
            "?security={}&encryption={}&headerType={}&fp={}&type={}&flow={}&pbk={}&sni={}&sid={}",
            e.security,
            e.encryption,
            e.header_type,
            e.fingerprint,
            e.network,
            e.flow,
            e.public_key,
            e.sni,
            e.sid,
        )?;
        write!(f, "#{}", utf8_percent_encode(self.alias, ALIAS))
    }
}
