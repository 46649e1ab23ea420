//! `webpack.config.js` rendering

use crate::options::ResolvedOptions;
use std::fmt::Write;

/// Import aliases pointing into the redux utility subtree
const REDUX_ALIASES: &[(&str, &str)] = &[
    ("actions", "src/utils/actions"),
    ("reducers", "src/utils/reducers"),
    ("middleware", "src/utils/middleware"),
    ("helpers", "src/utils/helpers"),
];

/// Front-end entry file; redux projects get a different file at the same path
const ENTRY: &str = "./src/index.js";

/// Render the bundler configuration
pub fn render_bundler_config(options: &ResolvedOptions) -> String {
    let mut out = String::new();

    out.push_str("const path = require('path');\n\n");
    out.push_str("module.exports = {\n");
    let _ = writeln!(out, "  entry: '{}',", ENTRY);
    out.push_str("  output: {\n");
    out.push_str("    path: path.resolve(__dirname, 'dist'),\n");
    out.push_str("    filename: 'bundle.js',\n");
    out.push_str("    publicPath: '/',\n");
    out.push_str("  },\n");

    out.push_str("  resolve: {\n");
    out.push_str("    extensions: ['.js', '.jsx'],\n");
    if options.uses_redux() {
        out.push_str("    alias: {\n");
        for (alias, target) in REDUX_ALIASES {
            let _ = writeln!(
                out,
                "      {}: path.resolve(__dirname, '{}'),",
                alias, target
            );
        }
        out.push_str("    },\n");
    }
    out.push_str("  },\n");

    out.push_str("  module: {\n");
    out.push_str("    rules: [\n");
    out.push_str("      {\n");
    out.push_str("        test: /\\.jsx?$/,\n");
    out.push_str("        exclude: /node_modules/,\n");
    out.push_str("        use: {\n");
    out.push_str("          loader: 'babel-loader',\n");
    out.push_str("          options: { presets: ['@babel/preset-env', '@babel/preset-react'] },\n");
    out.push_str("        },\n");
    out.push_str("      },\n");
    out.push_str("      {\n");
    out.push_str("        test: /\\.css$/,\n");
    // sandbox projects ship without a postcss config
    if options.sandbox {
        out.push_str("        use: ['style-loader', 'css-loader'],\n");
    } else {
        out.push_str("        use: ['style-loader', 'css-loader', 'postcss-loader'],\n");
    }
    out.push_str("      },\n");
    out.push_str("    ],\n");
    out.push_str("  },\n");

    out.push_str("  devServer: {\n");
    out.push_str("    static: path.resolve(__dirname, 'dist'),\n");
    let _ = writeln!(out, "    port: {},", options.dev_server_port);
    if options.router {
        out.push_str("    historyApiFallback: true,\n");
    }
    if let Some(api_path) = &options.api_path {
        out.push_str("    proxy: {\n");
        let _ = writeln!(
            out,
            "      {}: 'http://localhost:{}',",
            js_string(api_path),
            options.api_port
        );
        out.push_str("    },\n");
    }
    out.push_str("  },\n");
    out.push_str("};\n");

    out
}

/// Quote a user-supplied value as a JS string literal
fn js_string(value: &str) -> String {
    // a JSON string is also a valid JS string literal
    serde_json::Value::from(value).to_string()
}
