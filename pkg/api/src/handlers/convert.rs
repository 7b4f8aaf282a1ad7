use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::AppState;
use pkg_constants::manifest::FALLBACK_FILENAME;
use pkg_envfile::Diagnostic;
use pkg_types::secret::SecretManifest;
use pkg_types::validate::validate_name;

/// Request body shared by the convert and download endpoints.
/// Missing fields behave like empty ones.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub env_content: String,
    #[serde(default)]
    pub secret_name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub manifest: SecretManifest,
    pub diagnostics: Vec<Diagnostic>,
}

fn effective<'a>(requested: &'a str, default: &'a str) -> &'a str {
    let requested = requested.trim();
    if requested.is_empty() { default } else { requested }
}

/// Parse the request's env content and assemble the manifest. Diagnostics
/// ride along; they never fail the request.
fn build_secret(state: &AppState, req: &ConvertRequest) -> (SecretManifest, Vec<Diagnostic>) {
    let name = effective(&req.secret_name, &state.default_secret_name);
    let namespace = effective(&req.namespace, &state.default_namespace);

    if let Err(e) = validate_name(name) {
        warn!("Secret name would be rejected by a cluster: {}", e);
    }

    let parsed = pkg_envfile::parse(&req.env_content);
    let manifest = SecretManifest::build(parsed.entries, name, namespace);
    (manifest, parsed.diagnostics)
}

pub async fn convert(
    State(state): State<AppState>,
    Json(req): Json<ConvertRequest>,
) -> impl IntoResponse {
    let (manifest, diagnostics) = build_secret(&state, &req);
    info!(
        "Converted env content into secret {}/{} ({} keys, {} diagnostics)",
        manifest.metadata.namespace,
        manifest.metadata.name,
        manifest.data.len(),
        diagnostics.len()
    );
    (
        StatusCode::OK,
        Json(ConvertResponse {
            manifest,
            diagnostics,
        }),
    )
        .into_response()
}

pub async fn download(
    State(state): State<AppState>,
    Json(req): Json<ConvertRequest>,
) -> impl IntoResponse {
    let (manifest, diagnostics) = build_secret(&state, &req);
    if !diagnostics.is_empty() {
        warn!(
            "Download of secret {}/{} carries {} unparsed lines",
            manifest.metadata.namespace,
            manifest.metadata.name,
            diagnostics.len()
        );
    }

    match manifest.to_pretty_json() {
        Ok(body) => {
            let filename = sanitize_filename(&manifest.metadata.name);
            info!(
                "Serving secret {}/{} as {}.json",
                manifest.metadata.namespace, manifest.metadata.name, filename
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/json".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}.json\"", filename),
                    ),
                ],
                body,
            )
                .into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Serialization failed").into_response(),
    }
}

/// Reduce a caller-supplied secret name to something safe to offer as a
/// download filename: ASCII alphanumerics and `._-` pass through, whitespace
/// becomes `_`, everything else (path separators included) is dropped, and
/// leading dots/hyphens are stripped.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            out.push(c);
        } else if c.is_whitespace() {
            out.push('_');
        }
    }
    let out = out.trim_start_matches(['.', '-']);
    if out.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        out.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(sanitize_filename("my-secret"), "my-secret");
        assert_eq!(sanitize_filename("app.v2_prod"), "app.v2_prod");
    }

    #[test]
    fn path_traversal_is_neutralized() {
        assert_eq!(sanitize_filename("../etc/passwd"), "etcpasswd");
        assert_eq!(sanitize_filename("/root"), "root");
        assert_eq!(sanitize_filename("..\\win\\paths"), "winpaths");
    }

    #[test]
    fn whitespace_becomes_underscore() {
        assert_eq!(sanitize_filename("my secret name"), "my_secret_name");
    }

    #[test]
    fn hostile_input_falls_back() {
        assert_eq!(sanitize_filename(""), "secret");
        assert_eq!(sanitize_filename("///"), "secret");
        assert_eq!(sanitize_filename("..."), "secret");
    }

    #[test]
    fn empty_request_fields_take_state_defaults() {
        let state = AppState {
            default_secret_name: "my-secret".to_string(),
            default_namespace: "default".to_string(),
        };
        let req = ConvertRequest {
            env_content: "A=1".to_string(),
            secret_name: "  ".to_string(),
            namespace: String::new(),
        };
        let (manifest, diagnostics) = build_secret(&state, &req);
        assert_eq!(manifest.metadata.name, "my-secret");
        assert_eq!(manifest.metadata.namespace, "default");
        assert_eq!(manifest.data.get("A").unwrap(), "MQ==");
        assert!(diagnostics.is_empty());
    }
}
