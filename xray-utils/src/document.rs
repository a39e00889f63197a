use crate::ExtractError;
use serde_json::Value;

/// A position inside the Xray configuration document.
///
/// Lookups never fail on absence: a missing key or array yields an absent
/// node whose children are absent too, and leaf reads fall back to their
/// default. Only a shape that contradicts the expected layout (an empty
/// array where an element is needed, or a scalar where an object is
/// needed) is reported, as `ExtractError::Structure` carrying the path.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: Option<&'a Value>,
    path: String,
}

impl<'a> Node<'a> {
    pub fn root(value: &'a Value) -> Self {
        Self {
            value: Some(value),
            path: String::new(),
        }
    }

    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self.value, None | Some(Value::Null))
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_owned()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn structure_error(&self) -> ExtractError {
        ExtractError::Structure {
            path: self.path().to_owned(),
        }
    }

    /// Object member lookup, absent when the key is missing.
    pub fn key(&self, key: &str) -> Result<Node<'a>, ExtractError> {
        let path = self.child_path(key);
        match self.value {
            None | Some(Value::Null) => Ok(Self { value: None, path }),
            Some(Value::Object(map)) => Ok(Self {
                value: map.get(key),
                path,
            }),
            Some(_) => Err(self.structure_error()),
        }
    }

    /// Object member lookup that must be present.
    pub fn required(&self, key: &str) -> Result<Node<'a>, ExtractError> {
        let node = self.key(key)?;
        if node.is_present() {
            Ok(node)
        } else {
            Err(node.structure_error())
        }
    }

    fn array(&self) -> Result<Option<&'a Vec<Value>>, ExtractError> {
        match self.value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(self.structure_error()),
        }
    }

    /// True when this node is an array with at least one element.
    pub fn has_elements(&self) -> Result<bool, ExtractError> {
        Ok(self.array()?.map_or(false, |items| !items.is_empty()))
    }

    /// The first element of an array. A missing array gives an absent
    /// element; an empty one is a structure error.
    pub fn first(&self) -> Result<Node<'a>, ExtractError> {
        let path = format!("{}[0]", self.path());
        match self.array()? {
            None => Ok(Self { value: None, path }),
            Some(items) => match items.first() {
                Some(value) => Ok(Self {
                    value: Some(value),
                    path,
                }),
                None => Err(self.structure_error()),
            },
        }
    }

    /// Leaf value as text, or `default` when absent.
    pub fn string_or(&self, default: &str) -> Result<String, ExtractError> {
        match self.value {
            None | Some(Value::Null) => Ok(default.to_owned()),
            Some(Value::String(value)) => Ok(value.clone()),
            Some(Value::Number(value)) => Ok(value.to_string()),
            Some(Value::Bool(value)) => Ok(value.to_string()),
            Some(_) => Err(self.structure_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let doc = json!({ "outbounds": [] });
        let root = Node::root(&doc);
        let port = root
            .key("inbounds")
            .and_then(|node| node.first())
            .and_then(|node| node.key("settings"))
            .and_then(|node| node.key("port"))
            .unwrap();
        assert!(!port.is_present());
        assert_eq!(port.string_or("none").unwrap(), "none");
        assert_eq!(port.path(), "inbounds[0].settings.port");
    }

    #[test]
    fn numbers_are_rendered_as_text() {
        let doc = json!({ "port": 443, "tls": true });
        let root = Node::root(&doc);
        assert_eq!(root.key("port").unwrap().string_or("").unwrap(), "443");
        assert_eq!(root.key("tls").unwrap().string_or("").unwrap(), "true");
    }

    #[test]
    fn empty_array_is_a_structure_error() {
        let doc = json!({ "settings": { "vnext": [] } });
        let err = Node::root(&doc)
            .key("settings")
            .and_then(|node| node.key("vnext"))
            .and_then(|node| node.first())
            .unwrap_err();
        match err {
            ExtractError::Structure { path } => assert_eq!(path, "settings.vnext"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn scalar_in_place_of_object_is_a_structure_error() {
        let doc = json!({ "streamSettings": "reality" });
        let err = Node::root(&doc)
            .key("streamSettings")
            .and_then(|node| node.key("security"))
            .unwrap_err();
        assert!(err.is_structural());
    }

    #[test]
    fn required_key_must_be_present() {
        let doc = json!({ "port": 443 });
        let err = Node::root(&doc).required("settings").unwrap_err();
        match err {
            ExtractError::Structure { path } => assert_eq!(path, "settings"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn has_elements_distinguishes_empty_and_missing() {
        let doc = json!({ "outbounds": [], "inbounds": [{}] });
        let root = Node::root(&doc);
        assert!(!root.key("outbounds").unwrap().has_elements().unwrap());
        assert!(!root.key("routing").unwrap().has_elements().unwrap());
        assert!(root.key("inbounds").unwrap().has_elements().unwrap());
    }
}
