//! Writing the planned template files into the project directory

use crate::options::ResolvedOptions;
use crate::templates::manifest::{EntryContent, TemplateManifest};
use crate::templates::store::TemplateStore;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Copy and render every manifest entry that applies to `options`.
///
/// Returns the written paths relative to the project directory. Any write
/// failure aborts; files already written are left in place.
pub async fn assemble(
    store: &TemplateStore,
    manifest: &TemplateManifest,
    options: &ResolvedOptions,
) -> Result<Vec<PathBuf>> {
    let target_dir = &options.app_dir;

    // Ensure target directory exists
    fs::create_dir_all(target_dir)
        .await
        .context("Failed to create target directory")?;

    let mut written = BTreeSet::new();

    for entry in manifest.plan(options) {
        let dest = Path::new(&entry.dest);

        match entry.content()? {
            EntryContent::Source(source) => {
                for file in store.files(source)? {
                    // joining an empty path would add a trailing separator
                    let relative = if file.relative.as_os_str().is_empty() {
                        dest.to_path_buf()
                    } else {
                        dest.join(&file.relative)
                    };
                    write_file(target_dir, &relative, &file.contents).await?;
                    written.insert(normalize(&relative));
                }
            }
            EntryContent::Render(renderer) => {
                let content = renderer.render(options)?;
                write_file(target_dir, dest, content.as_bytes()).await?;
                written.insert(normalize(dest));
            }
        }
    }

    Ok(written.into_iter().collect())
}

async fn write_file(target_dir: &Path, relative: &Path, contents: &[u8]) -> Result<()> {
    let target_path = target_dir.join(relative);

    // Ensure parent directories exist
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&target_path, contents)
        .await
        .with_context(|| format!("Failed to write file: {}", target_path.display()))
}

/// Drop `.` components so `./x` and `x` count as the same file
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionsDraft;
    use tempfile::TempDir;

    fn options(dir: &TempDir, configure: impl FnOnce(&mut OptionsDraft)) -> ResolvedOptions {
        let mut draft = OptionsDraft::new("myApp");
        configure(&mut draft);
        draft.finish(dir.path(), &mut Vec::new())
    }

    async fn generate(options: &ResolvedOptions) -> Vec<PathBuf> {
        let store = TemplateStore::embedded();
        let manifest = store.load_manifest().unwrap();
        assemble(&store, &manifest, options).await.unwrap()
    }

    fn read(options: &ResolvedOptions, path: &str) -> String {
        std::fs::read_to_string(options.app_dir.join(path)).unwrap()
    }

    #[tokio::test]
    async fn test_plain_project_layout() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir, |_| {});
        let written = generate(&opts).await;

        let root = &opts.app_dir;
        for path in [
            ".env",
            ".gitignore",
            "package.json",
            "postcss.config.js",
            "README.md",
            "webpack.config.js",
            "dist/index.html",
            "src/index.js",
            "src/components/App.js",
        ] {
            assert!(root.join(path).is_file(), "missing {}", path);
            assert!(written.contains(&PathBuf::from(path)), "unreported {}", path);
        }
        assert!(!root.join("server.js").exists());
        assert!(!root.join("api").exists());
        assert!(!root.join("src/utils").exists());
        assert!(!root.join("src/store.js").exists());

        let manifest: serde_json::Value =
            serde_json::from_str(&read(&opts, "package.json")).unwrap();
        assert_eq!(manifest["name"], "myApp");
    }

    #[tokio::test]
    async fn test_mongo_project_layout() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir, |d| {
            d.express = true;
            d.mongo = true;
        });
        generate(&opts).await;

        let root = &opts.app_dir;
        assert!(read(&opts, "server.js").contains("mongoose"));
        assert!(root.join("api/index.js").is_file());
        assert!(root.join("api/utils").is_dir());
        assert!(read(&opts, ".env").contains("mongoURI=mongodb://localhost:27017/myApp"));
    }

    #[tokio::test]
    async fn test_express_project_has_home_route_only() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir, |d| d.express = true);
        generate(&opts).await;

        let root = &opts.app_dir;
        assert!(!read(&opts, "server.js").contains("mongoose"));
        let api: Vec<_> = std::fs::read_dir(root.join("api"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(api, vec![std::ffi::OsString::from("home.js")]);
    }

    #[tokio::test]
    async fn test_redux_without_router_uses_plain_variants() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir, |d| d.redux = true);
        generate(&opts).await;

        let root = &opts.app_dir;
        for sub in ["actions", "reducers", "middleware", "helpers"] {
            assert!(root.join("src/utils").join(sub).is_dir(), "missing {}", sub);
        }
        assert!(read(&opts, "src/index.js").contains("Provider"));
        assert!(!read(&opts, "src/store.js").contains("redux-first-router"));
        assert!(!read(&opts, "src/components/App.js").contains("NotFound"));
        assert!(root.join("src/components/Example.js").is_file());
        assert!(!root.join("src/routesMap.js").exists());
        assert!(!root.join("src/components/NotFound.js").exists());
    }

    #[tokio::test]
    async fn test_router_uses_router_variants() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir, |d| {
            d.redux = true;
            d.router = true;
        });
        generate(&opts).await;

        let root = &opts.app_dir;
        assert!(read(&opts, "src/components/App.js").contains("NotFound"));
        assert!(read(&opts, "src/store.js").contains("redux-first-router"));
        assert!(root.join("src/routesMap.js").is_file());
        assert!(root.join("src/components/NotFound.js").is_file());
    }

    #[tokio::test]
    async fn test_sandbox_replaces_everything() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir, |d| {
            d.sandbox = true;
            d.express = true;
            d.redux = true;
        });
        generate(&opts).await;

        let root = &opts.app_dir;
        assert!(root.join("package.json").is_file());
        assert!(root.join("src/index.js").is_file());
        assert!(!root.join(".env").exists());
        assert!(!root.join("server.js").exists());
        assert!(!root.join("api").exists());
        assert!(!root.join("src/utils").exists());
    }

    #[tokio::test]
    async fn test_write_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir, |_| {});
        // a file where the project directory should be
        std::fs::write(&opts.app_dir, "occupied").unwrap();

        let store = TemplateStore::embedded();
        let manifest = store.load_manifest().unwrap();
        assert!(assemble(&store, &manifest, &opts).await.is_err());
    }

    #[test]
    fn test_normalize_drops_current_dir() {
        assert_eq!(normalize(Path::new("./src/index.js")), PathBuf::from("src/index.js"));
    }
}
