use pkg_constants::manifest::{
    DEFAULT_NAMESPACE, DEFAULT_SECRET_NAME, SECRET_API_VERSION, SECRET_KIND, SECRET_TYPE,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretMetadata {
    pub name: String,
    pub namespace: String,
}

/// Kubernetes Secret manifest.
///
/// Field declaration order is the serialized key order:
/// `kind, apiVersion, metadata, type, data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretManifest {
    pub kind: String,
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub metadata: SecretMetadata,
    #[serde(rename = "type")]
    pub secret_type: String,
    /// Secret data stored as base64-encoded values, sorted by key.
    pub data: BTreeMap<String, String>,
}

impl SecretManifest {
    /// Wrap already-encoded entries into the fixed Secret envelope.
    ///
    /// Empty `name`/`namespace` fall back to `my-secret`/`default`. No other
    /// validation happens here; the entries are stored as given.
    pub fn build(data: BTreeMap<String, String>, name: &str, namespace: &str) -> Self {
        let name = if name.is_empty() {
            DEFAULT_SECRET_NAME
        } else {
            name
        };
        let namespace = if namespace.is_empty() {
            DEFAULT_NAMESPACE
        } else {
            namespace
        };
        Self {
            kind: SECRET_KIND.to_string(),
            api_version: SECRET_API_VERSION.to_string(),
            metadata: SecretMetadata {
                name: name.to_string(),
                namespace: namespace.to_string(),
            },
            secret_type: SECRET_TYPE.to_string(),
            data,
        }
    }

    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> BTreeMap<String, String> {
        let mut data = BTreeMap::new();
        data.insert("DB_HOST".to_string(), "bG9jYWxob3N0".to_string());
        data.insert("DB_PORT".to_string(), "NTQzMg==".to_string());
        data
    }

    #[test]
    fn envelope_is_fixed() {
        let manifest = SecretManifest::build(sample_data(), "app-secret", "staging");
        assert_eq!(manifest.kind, "Secret");
        assert_eq!(manifest.api_version, "v1");
        assert_eq!(manifest.secret_type, "Opaque");
        assert_eq!(manifest.metadata.name, "app-secret");
        assert_eq!(manifest.metadata.namespace, "staging");
        assert_eq!(manifest.data.len(), 2);
    }

    #[test]
    fn empty_name_and_namespace_use_defaults() {
        let manifest = SecretManifest::build(BTreeMap::new(), "", "");
        assert_eq!(manifest.metadata.name, "my-secret");
        assert_eq!(manifest.metadata.namespace, "default");
    }

    #[test]
    fn json_key_order_is_stable() {
        let json = SecretManifest::build(sample_data(), "app-secret", "staging")
            .to_pretty_json()
            .unwrap();
        let positions: Vec<usize> = ["\"kind\"", "\"apiVersion\"", "\"metadata\"", "\"type\"", "\"data\""]
            .iter()
            .map(|k| json.find(k).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "key order drifted: {json}");
        // metadata sub-order: name before namespace
        assert!(json.find("\"name\"").unwrap() < json.find("\"namespace\"").unwrap());
    }

    #[test]
    fn yaml_round_trips() {
        let manifest = SecretManifest::build(sample_data(), "app-secret", "staging");
        let yaml = manifest.to_yaml().unwrap();
        let back: SecretManifest = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.metadata.name, "app-secret");
        assert_eq!(back.data.get("DB_HOST").unwrap(), "bG9jYWxob3N0");
    }
}
