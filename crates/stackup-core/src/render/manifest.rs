//! `package.json` rendering

use crate::options::ResolvedOptions;
use serde::Serialize;
use std::collections::BTreeMap;

/// Version written into every generated manifest
pub const PROJECT_VERSION: &str = "0.1.0";

const BASE_DEPENDENCIES: &[(&str, &str)] = &[("react", "^18.2.0"), ("react-dom", "^18.2.0")];

const REDUX_DEPENDENCIES: &[(&str, &str)] = &[
    ("redux", "^4.2.1"),
    ("react-redux", "^8.1.3"),
    ("redux-thunk", "^2.4.2"),
];

const ROUTER_DEPENDENCIES: &[(&str, &str)] = &[
    ("redux-first-router", "^2.1.5"),
    ("redux-first-router-link", "^2.1.1"),
];

const EXPRESS_DEPENDENCIES: &[(&str, &str)] = &[("express", "^4.18.2"), ("dotenv", "^16.3.1")];

const MONGO_DEPENDENCIES: &[(&str, &str)] = &[
    ("mongoose", "^7.6.3"),
    ("express-session", "^1.17.3"),
    ("connect-mongo", "^5.1.0"),
];

const BUNDLER_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@babel/core", "^7.23.2"),
    ("@babel/preset-env", "^7.23.2"),
    ("@babel/preset-react", "^7.22.15"),
    ("autoprefixer", "^10.4.16"),
    ("babel-loader", "^9.1.3"),
    ("css-loader", "^6.8.1"),
    ("postcss", "^8.4.31"),
    ("postcss-loader", "^7.3.3"),
    ("style-loader", "^3.3.3"),
    ("webpack", "^5.89.0"),
    ("webpack-cli", "^5.1.4"),
    ("webpack-dev-server", "^4.15.1"),
];

const SERVER_DEV_DEPENDENCIES: &[(&str, &str)] =
    &[("concurrently", "^8.2.2"), ("nodemon", "^3.0.1")];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest<'a> {
    name: &'a str,
    version: &'static str,
    description: &'a str,
    private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    main: Option<&'static str>,
    keywords: &'a [String],
    author: Author<'a>,
    scripts: BTreeMap<&'static str, &'static str>,
    dependencies: BTreeMap<&'static str, &'static str>,
    dev_dependencies: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
struct Author<'a> {
    name: &'a str,
    email: &'a str,
}

/// Render `package.json`
pub fn render_manifest(options: &ResolvedOptions) -> serde_json::Result<String> {
    // Sandbox projects are always a plain front end
    let server = options.server() && !options.sandbox;
    let redux = options.uses_redux() && !options.sandbox;

    let mut scripts = BTreeMap::new();
    scripts.insert("build", "webpack --mode production");
    if server {
        scripts.insert("start", "node server.js");
        scripts.insert("dev", "concurrently \"npm:dev:client\" \"npm:dev:api\"");
        scripts.insert("dev:client", "webpack serve --mode development");
        scripts.insert("dev:api", "nodemon server.js");
    } else {
        scripts.insert("start", "webpack serve --mode development");
    }

    let mut dependencies = BTreeMap::new();
    let mut groups = vec![BASE_DEPENDENCIES];
    if redux {
        groups.push(REDUX_DEPENDENCIES);
    }
    if options.router && !options.sandbox {
        groups.push(ROUTER_DEPENDENCIES);
    }
    if server {
        groups.push(EXPRESS_DEPENDENCIES);
    }
    if options.mongo && !options.sandbox {
        groups.push(MONGO_DEPENDENCIES);
    }
    for group in groups {
        dependencies.extend(group.iter().copied());
    }

    let mut dev_dependencies: BTreeMap<_, _> = BUNDLER_DEV_DEPENDENCIES.iter().copied().collect();
    if server {
        dev_dependencies.extend(SERVER_DEV_DEPENDENCIES.iter().copied());
    }

    let manifest = PackageManifest {
        name: &options.app_name,
        version: PROJECT_VERSION,
        description: &options.description,
        private: true,
        main: server.then_some("server.js"),
        keywords: &options.keywords,
        author: Author {
            name: &options.author,
            email: &options.email,
        },
        scripts,
        dependencies,
        dev_dependencies,
    };

    let mut out = serde_json::to_string_pretty(&manifest)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionsDraft;
    use serde_json::Value;
    use std::path::Path;

    fn render(configure: impl FnOnce(&mut OptionsDraft)) -> Value {
        let mut draft = OptionsDraft::new("myApp");
        configure(&mut draft);
        let options = draft.finish(Path::new("/work"), &mut Vec::new());
        serde_json::from_str(&render_manifest(&options).unwrap()).unwrap()
    }

    #[test]
    fn test_plain_manifest() {
        let manifest = render(|d| {
            d.author = "Jane".to_string();
            d.email = "jane@example.com".to_string();
            d.keywords = vec!["react".to_string()];
        });

        assert_eq!(manifest["name"], "myApp");
        assert_eq!(manifest["version"], "0.1.0");
        assert_eq!(manifest["description"], "myApp");
        assert_eq!(manifest["keywords"][0], "react");
        assert_eq!(manifest["author"]["name"], "Jane");
        assert_eq!(manifest["author"]["email"], "jane@example.com");
        assert!(manifest.get("main").is_none());
        assert_eq!(manifest["scripts"]["start"], "webpack serve --mode development");
        assert!(manifest["scripts"].get("dev:api").is_none());
        assert!(manifest["dependencies"].get("express").is_none());
    }

    #[test]
    fn test_server_manifest_adds_entry_and_scripts() {
        let manifest = render(|d| d.express = true);

        assert_eq!(manifest["main"], "server.js");
        assert_eq!(manifest["scripts"]["start"], "node server.js");
        assert!(manifest["scripts"]["dev"]
            .as_str()
            .unwrap()
            .starts_with("concurrently"));
        assert_eq!(manifest["scripts"]["dev:api"], "nodemon server.js");
        assert!(manifest["dependencies"].get("express").is_some());
        assert!(manifest["dependencies"].get("mongoose").is_none());
        assert!(manifest["devDependencies"].get("concurrently").is_some());
    }

    #[test]
    fn test_addon_dependencies() {
        let manifest = render(|d| {
            d.redux = true;
            d.router = true;
            d.express = true;
            d.mongo = true;
        });
        for dep in ["redux", "react-redux", "redux-first-router", "mongoose", "connect-mongo"] {
            assert!(manifest["dependencies"].get(dep).is_some(), "missing {}", dep);
        }
    }

    #[test]
    fn test_sandbox_manifest_ignores_addons() {
        let manifest = render(|d| {
            d.sandbox = true;
            d.redux = true;
            d.express = true;
        });
        assert!(manifest.get("main").is_none());
        assert!(manifest["dependencies"].get("redux").is_none());
        assert!(manifest["dependencies"].get("express").is_none());
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut draft = OptionsDraft::new("myApp");
        draft.redux = true;
        let options = draft.finish(Path::new("/work"), &mut Vec::new());
        assert_eq!(
            render_manifest(&options).unwrap(),
            render_manifest(&options).unwrap()
        );
    }
}
