//! `.env` file rendering

use crate::options::ResolvedOptions;
use uuid::Uuid;

/// Default local MongoDB server
const MONGO_HOST: &str = "mongodb://localhost:27017";

/// Render the environment file with a freshly generated session secret
pub fn render_env(options: &ResolvedOptions) -> String {
    render_env_with_secret(options, &session_secret())
}

/// Random session secret (UUID v4, 122 random bits)
pub fn session_secret() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Render the environment file using the given session secret
pub fn render_env_with_secret(options: &ResolvedOptions, secret: &str) -> String {
    let port = if options.server() {
        options.api_port
    } else {
        options.dev_server_port
    };

    let mut lines = vec![
        format!("appName={}", options.app_name),
        format!("port={}", port),
    ];

    if options.server() {
        if let Some(api_path) = &options.api_path {
            lines.push(format!("apiPath={}", api_path));
        }
    }

    if options.mongo {
        lines.push(format!("mongoURI={}/{}", MONGO_HOST, options.app_name));
        lines.push(format!("sessionName={}.sid", options.app_name));
        lines.push(format!("sessionSecret={}", secret));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionsDraft;
    use std::path::Path;

    fn options(configure: impl FnOnce(&mut OptionsDraft)) -> ResolvedOptions {
        let mut draft = OptionsDraft::new("myApp");
        configure(&mut draft);
        draft.finish(Path::new("/work"), &mut Vec::new())
    }

    #[test]
    fn test_plain_env_has_name_and_dev_port() {
        let env = render_env(&options(|_| {}));
        assert_eq!(env, "appName=myApp\nport=8080\n");
    }

    #[test]
    fn test_server_env_uses_api_port() {
        let env = render_env(&options(|d| d.express = true));
        assert!(env.contains("port=3000\n"));
        assert!(env.contains("apiPath=/api\n"));
        assert!(!env.contains("mongoURI"));
        assert!(!env.contains("sessionSecret"));
    }

    #[test]
    fn test_mongo_env_has_database_and_session() {
        let env = render_env_with_secret(
            &options(|d| {
                d.express = true;
                d.mongo = true;
            }),
            "secret",
        );
        assert!(env.contains("mongoURI=mongodb://localhost:27017/myApp\n"));
        assert!(env.contains("sessionName=myApp.sid\n"));
        assert!(env.contains("sessionSecret=secret\n"));
    }

    #[test]
    fn test_rendering_is_deterministic_apart_from_secret() {
        let opts = options(|d| d.mongo = true);
        assert_eq!(
            render_env_with_secret(&opts, "fixed"),
            render_env_with_secret(&opts, "fixed")
        );

        let first = render_env(&opts);
        let second = render_env(&opts);
        let strip = |env: &str| {
            env.lines()
                .filter(|l| !l.starts_with("sessionSecret="))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip(&first), strip(&second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_session_secret_is_fresh() {
        let secret = session_secret();
        assert_eq!(secret.len(), 32);
        assert_ne!(secret, session_secret());
    }
}
