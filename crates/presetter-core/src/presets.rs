//! Built-in baseline profiles
//!
//! These are the canonical baselines the shared presets ship with. They are
//! constructed fresh on every call so callers own their copy; nothing here
//! is global state. Collaborators with custom baselines can build their own
//! [`Profile`] values instead.

use serde_json::{Value, json};

use crate::document::Document;
use crate::profile::Profile;

fn document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("preset references are object literals"),
    }
}

/// The TypeScript baseline: parser, preset chain, and the rule overrides
/// every TypeScript project in the workspace shares.
pub fn typescript_baseline() -> Profile {
    Profile {
        name: "typescript-baseline".to_string(),
        reference: document(json!({
            "parser": "@typescript-eslint/parser",
            "parserOptions": {
                "ecmaVersion": 2020,
                "sourceType": "module",
                "project": "./tsconfig.json"
            },
            "plugins": ["@typescript-eslint"],
            "extends": [
                "eslint:recommended",
                "plugin:@typescript-eslint/recommended",
                "prettier"
            ],
            "rules": {
                "@typescript-eslint/explicit-module-boundary-types": "off",
                "@typescript-eslint/no-explicit-any": "warn",
                "@typescript-eslint/no-unused-vars": ["error", {"argsIgnorePattern": "^_"}],
                "no-console": "warn"
            },
            "overrides": [
                {
                    "files": ["*.spec.ts", "*.test.ts"],
                    "env": {"jest": true},
                    "rules": {"@typescript-eslint/no-non-null-assertion": "off"}
                }
            ]
        })),
        extends_id: "plugin:@presetter/typescript".to_string(),
        plugins_id: "@presetter".to_string(),
        reduce_env_and_settings: false,
    }
}

/// The React baseline: builds on the TypeScript baseline and also owns the
/// browser `env` and the shared `settings.react` block, so those fields are
/// deduplicated too.
pub fn react_baseline() -> Profile {
    Profile {
        name: "react-baseline".to_string(),
        reference: document(json!({
            "parser": "@typescript-eslint/parser",
            "parserOptions": {
                "ecmaVersion": 2020,
                "sourceType": "module",
                "ecmaFeatures": {"jsx": true}
            },
            "plugins": ["@typescript-eslint", "react", "react-hooks"],
            "extends": [
                "eslint:recommended",
                "plugin:@typescript-eslint/recommended",
                "plugin:react/recommended",
                "plugin:react-hooks/recommended",
                "prettier"
            ],
            "env": {"browser": true, "es2020": true},
            "settings": {"react": {"version": "detect"}},
            "rules": {
                "react/prop-types": "off",
                "react/react-in-jsx-scope": "off",
                "no-console": "warn"
            },
            "overrides": [
                {
                    "files": ["*.spec.tsx", "*.test.tsx"],
                    "env": {"jest": true},
                    "rules": {"react/display-name": "off"}
                }
            ]
        })),
        extends_id: "plugin:@presetter/react".to_string(),
        plugins_id: "@presetter".to_string(),
        reduce_env_and_settings: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baselines_inject_distinct_extends_ids() {
        assert_ne!(
            typescript_baseline().extends_id,
            react_baseline().extends_id
        );
    }

    #[test]
    fn test_react_baseline_covers_env_and_settings() {
        let react = react_baseline();
        assert!(react.reduce_env_and_settings);
        assert!(react.reference.contains_key("env"));
        assert!(react.reference.contains_key("settings"));

        let typescript = typescript_baseline();
        assert!(!typescript.reduce_env_and_settings);
    }

    #[test]
    fn test_baseline_references_are_owned_copies() {
        let mut first = typescript_baseline();
        first.reference.remove("rules");
        assert!(typescript_baseline().reference.contains_key("rules"));
    }
}
