//! Endpoint resolution for resource collections.

use crate::config::Environment;
use crate::resource::ResourceKind;

const LOCAL_BASE: &str = "http://localhost:8000";
const FORWARDED_PORT: u16 = 8000;

/// Absolute URL of a resource collection, trailing slash included.
///
/// A codespace name selects the forwarded `app.github.dev` host; otherwise
/// the local development server is used.
pub fn resolve_endpoint(env: &Environment, kind: ResourceKind) -> String {
    let url = match env.codespace_name() {
        Some(name) => format!(
            "https://{name}-{FORWARDED_PORT}.app.github.dev/api/{}/",
            kind.path_segment()
        ),
        None => format!("{LOCAL_BASE}/api/{}/", kind.path_segment()),
    };
    tracing::debug!(resource = %kind, %url, "resolved endpoint");
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codespace_url_for_every_kind() {
        let env = Environment::codespace("e");
        for kind in ResourceKind::ALL {
            assert_eq!(
                resolve_endpoint(&env, kind),
                format!("https://e-8000.app.github.dev/api/{kind}/")
            );
        }
    }

    #[test]
    fn local_url_for_every_kind() {
        for env in [Environment::local(), Environment::codespace("")] {
            for kind in ResourceKind::ALL {
                assert_eq!(
                    resolve_endpoint(&env, kind),
                    format!("http://localhost:8000/api/{kind}/")
                );
            }
        }
    }

    #[test]
    fn leaderboard_codespace_url() {
        let env = Environment::codespace("fuzzy-fiesta-q7x");
        assert_eq!(
            resolve_endpoint(&env, ResourceKind::Leaderboard),
            "https://fuzzy-fiesta-q7x-8000.app.github.dev/api/leaderboard/"
        );
    }
}
