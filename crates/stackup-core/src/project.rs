//! Materializing a project directory from resolved options

use crate::options::ResolvedOptions;
use crate::templates::{assemble, TemplateStore};
use anyhow::Result;
use std::path::PathBuf;

/// Create the project directory and write every planned file into it.
///
/// Returns the written paths relative to the project directory.
pub async fn generate(store: &TemplateStore, options: &ResolvedOptions) -> Result<Vec<PathBuf>> {
    let manifest = store.load_manifest()?;
    assemble(store, &manifest, options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::resolve::{resolve_args, Environment, GenerateArgs};
    use tempfile::TempDir;

    fn args(name: &str, configure: impl FnOnce(&mut GenerateArgs)) -> GenerateArgs {
        let mut args = GenerateArgs {
            app_name: Some(name.to_string()),
            skip_install: true,
            ..Default::default()
        };
        configure(&mut args);
        args
    }

    async fn run(dir: &TempDir, args: &GenerateArgs) -> ResolvedOptions {
        let env = Environment::new(dir.path(), true);
        let options = resolve_args(args, &env).unwrap().options;
        generate(&TemplateStore::embedded(), &options).await.unwrap();
        options
    }

    #[tokio::test]
    async fn test_name_only() {
        let dir = TempDir::new().unwrap();
        let options = run(&dir, &args("myApp", |_| {})).await;

        let root = dir.path().join("myApp");
        assert_eq!(options.app_dir, root);
        assert!(root.is_dir());

        let manifest: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(root.join("package.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["name"], "myApp");
        assert!(!root.join("api").exists());
        assert!(!root.join("server.js").exists());
    }

    #[tokio::test]
    async fn test_express_with_mongo() {
        let dir = TempDir::new().unwrap();
        run(
            &dir,
            &args("myApp", |a| {
                a.express = true;
                a.mongo = true;
            }),
        )
        .await;

        let root = dir.path().join("myApp");
        let server = std::fs::read_to_string(root.join("server.js")).unwrap();
        assert!(server.contains("mongoose"));
        assert!(root.join("api").is_dir());
        assert!(root.join("api/utils").is_dir());

        let env = std::fs::read_to_string(root.join(".env")).unwrap();
        let mongo_line = env.lines().find(|l| l.starts_with("mongoURI=")).unwrap();
        assert!(mongo_line.contains("myApp"));
    }

    #[tokio::test]
    async fn test_redux_with_router() {
        let dir = TempDir::new().unwrap();
        run(
            &dir,
            &args("myApp", |a| {
                a.redux = true;
                a.router = true;
            }),
        )
        .await;

        let src = dir.path().join("myApp/src");
        let app = std::fs::read_to_string(src.join("components/App.js")).unwrap();
        assert!(app.contains("NotFound"));
        let store = std::fs::read_to_string(src.join("store.js")).unwrap();
        assert!(store.contains("connectRoutes"));
        assert!(src.join("routesMap.js").is_file());
    }

    #[tokio::test]
    async fn test_port_collision() {
        let dir = TempDir::new().unwrap();
        let options = run(
            &dir,
            &args("myApp", |a| {
                a.dev_server_port = Some("3000".to_string());
                a.api_port = Some("3000".to_string());
                a.express = true;
            }),
        )
        .await;

        assert_eq!(options.dev_server_port, 3001);
        let config =
            std::fs::read_to_string(dir.path().join("myApp/webpack.config.js")).unwrap();
        assert!(config.contains("port: 3001,"));
        assert!(config.contains("\"/api\": 'http://localhost:3000',"));
    }

    #[tokio::test]
    async fn test_quote_in_api_path_keeps_config_valid() {
        let dir = TempDir::new().unwrap();
        run(
            &dir,
            &args("my-app", |a| {
                a.express = true;
                a.api = Some("/a'b".to_string());
            }),
        )
        .await;

        let config =
            std::fs::read_to_string(dir.path().join("my-app/webpack.config.js")).unwrap();
        assert!(config.contains("\"/a'b\": 'http://localhost:3000',"));
        assert!(!config.contains("'/a'b'"));
    }

    #[tokio::test]
    async fn test_sandbox_honours_dev_server_port() {
        let dir = TempDir::new().unwrap();
        let options = run(
            &dir,
            &args("my-app", |a| {
                a.sandbox = true;
                a.dev_server_port = Some("9000".to_string());
            }),
        )
        .await;

        assert_eq!(options.dev_server_port, 9000);
        let config =
            std::fs::read_to_string(dir.path().join("my-app/webpack.config.js")).unwrap();
        assert!(config.contains("port: 9000,"));
    }

    #[test]
    fn test_invalid_name_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let env = Environment::new(dir.path(), true);
        let result = resolve_args(&args("My App", |_| {}), &env);

        assert!(matches!(result, Err(ResolveError::InvalidName { .. })));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
