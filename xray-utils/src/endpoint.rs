use crate::document::Node;
use crate::prompt::{is_unset, prompt_non_empty, Prompt};
use crate::{ExtractError, NONE};
use log::*;
use serde_json::Value;

pub const ADDRESS_QUESTION: &str = "Input the server address (can't be empty): ";
pub const PUBLIC_KEY_QUESTION: &str = "Input your Public Key (can't be empty): ";

/// Fingerprint advertised for links built from a server-side inbound.
pub const INBOUND_FINGERPRINT: &str = "firefox";

/// The VLESS endpoint parameters pulled out of an Xray config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub uuid: String,
    pub address: String,
    pub port: String,
    pub security: String,
    pub network: String,
    pub sni: String,
    pub sid: String,
    pub flow: String,
    pub header_type: String,
    pub fingerprint: String,
    pub public_key: String,
    pub encryption: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            uuid: String::new(),
            address: String::new(),
            port: NONE.to_owned(),
            security: NONE.to_owned(),
            network: NONE.to_owned(),
            sni: NONE.to_owned(),
            sid: NONE.to_owned(),
            flow: NONE.to_owned(),
            header_type: NONE.to_owned(),
            fingerprint: NONE.to_owned(),
            public_key: String::new(),
            encryption: NONE.to_owned(),
        }
    }
}

impl Endpoint {
    /// Builds the endpoint from the first outbound, falling back to the
    /// first inbound when no outbound provides an address. Values the
    /// document lacks but a link cannot do without are asked for.
    pub fn from_config(config: &Value, prompt: &mut dyn Prompt) -> Result<Self, ExtractError> {
        let root = Node::root(config);
        let mut endpoint = Self::default();

        let outbounds = root.key("outbounds")?;
        if outbounds.has_elements()? {
            debug!("Reading client endpoint from {}", outbounds.path());
            endpoint.read_outbound(&outbounds.first()?, prompt)?;
        }

        let inbounds = root.key("inbounds")?;
        if inbounds.has_elements()? && endpoint.address.is_empty() {
            debug!("Reading server endpoint from {}", inbounds.path());
            endpoint.read_inbound(&inbounds.first()?, prompt)?;
        }

        if endpoint.address.is_empty() {
            return Err(ExtractError::MissingAddress);
        }
        Ok(endpoint)
    }

    fn read_stream_settings(&mut self, entry: &Node) -> Result<(), ExtractError> {
        let stream = entry.key("streamSettings")?;
        self.security = stream.key("security")?.string_or(NONE)?;
        self.network = stream.key("network")?.string_or(NONE)?;
        Ok(())
    }

    fn read_outbound(
        &mut self,
        outbound: &Node,
        prompt: &mut dyn Prompt,
    ) -> Result<(), ExtractError> {
        let vnext = outbound.key("settings")?.key("vnext")?.first()?;
        let user = vnext.key("users")?.first()?;

        self.uuid = user.key("id")?.string_or("")?;
        self.address = vnext.key("address")?.string_or("")?;
        self.port = vnext.key("port")?.string_or(NONE)?;
        self.read_stream_settings(outbound)?;

        let reality = outbound.key("streamSettings")?.key("realitySettings")?;
        self.sni = reality.key("serverName")?.string_or(NONE)?;
        self.sid = reality.key("shortId")?.string_or(NONE)?;
        self.fingerprint = reality.key("fingerprint")?.string_or(NONE)?;
        self.public_key = reality.key("publicKey")?.string_or("")?;
        self.flow = user.key("flow")?.string_or(NONE)?;
        self.header_type = user.key("headerType")?.string_or(NONE)?;
        self.encryption = user.key("encryption")?.string_or(NONE)?;

        if is_unset(&self.public_key) {
            debug!("Outbound has no public key");
            self.public_key = prompt_non_empty(prompt, PUBLIC_KEY_QUESTION)?;
        }
        Ok(())
    }

    fn read_inbound(
        &mut self,
        inbound: &Node,
        prompt: &mut dyn Prompt,
    ) -> Result<(), ExtractError> {
        let settings = inbound.required("settings")?;
        let client = settings.key("clients")?.first()?;

        self.uuid = client.key("id")?.string_or("")?;
        self.port = inbound.key("port")?.string_or(NONE)?;
        self.read_stream_settings(inbound)?;

        let reality = inbound.key("streamSettings")?.key("realitySettings")?;
        self.sni = reality.key("serverNames")?.first()?.string_or(NONE)?;
        self.sid = reality.key("shortIds")?.first()?.string_or(NONE)?;
        self.flow = client.key("flow")?.string_or(NONE)?;
        self.fingerprint = INBOUND_FINGERPRINT.to_owned();

        if settings.key("decryption")?.string_or(NONE)? == NONE {
            self.encryption = NONE.to_owned();
        }

        // A server config never knows the address clients reach it by.
        self.address = prompt_non_empty(prompt, ADDRESS_QUESTION)?;
        if is_unset(&self.public_key) {
            self.public_key = prompt_non_empty(prompt, PUBLIC_KEY_QUESTION)?;
        }
        Ok(())
    }
}
