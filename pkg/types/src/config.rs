use serde::{Deserialize, Serialize};

/// Server configuration file (YAML).
///
/// Example `config.yaml`:
/// ```yaml
/// port: 5000
/// default-secret-name: my-secret
/// default-namespace: default
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfigFile {
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default, alias = "default-secret-name")]
    pub default_secret_name: Option<String>,
    #[serde(default, alias = "default-namespace")]
    pub default_namespace: Option<String>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg: ServerConfigFile = load_config_file("/nonexistent/envseal/config.yaml").unwrap();
        assert!(cfg.port.is_none());
        assert!(cfg.default_secret_name.is_none());
    }

    #[test]
    fn kebab_case_aliases_parse() {
        let cfg: ServerConfigFile = serde_yaml::from_str(
            "port: 8080\ndefault-secret-name: app-secret\ndefault-namespace: staging\n",
        )
        .unwrap();
        assert_eq!(cfg.port, Some(8080));
        assert_eq!(cfg.default_secret_name.as_deref(), Some("app-secret"));
        assert_eq!(cfg.default_namespace.as_deref(), Some("staging"));
    }
}
