use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use artipub_publish::{Credentials, PublishOptions};
use serde::Deserialize;

use crate::cli::App;

/// Option values read from a `--config` JSON file.
///
/// Keys mirror the long command line flags; the one-letter aliases are
/// accepted too.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    #[serde(alias = "f")]
    pub file:       Option<PathBuf>,
    #[serde(alias = "t")]
    pub target:     Option<String>,
    #[serde(alias = "u")]
    pub user:       Option<String>,
    #[serde(alias = "p")]
    pub password:   Option<Scalar>,
    pub proxy:      Option<String>,
    pub parameters: Vec<String>,
    #[serde(alias = "dryRun")]
    pub dry_run:    Option<bool>,
    pub sha256:     Option<bool>,
}

/// Numeric passwords are common in hand-written config files.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
        }
    }
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Fully merged settings for one run.
#[derive(Debug)]
pub struct Settings {
    pub file:    PathBuf,
    pub target:  String,
    pub options: PublishOptions,
}

impl Settings {
    /// Merge the config file (if any) under the command line.
    pub fn resolve(app: &App) -> Result<Self> {
        let config = match app.config {
            Some(ref path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(app, config)
    }

    fn merge(app: &App, config: FileConfig) -> Result<Self> {
        let Some(file) = app.file.clone().or(config.file) else {
            bail!("missing required argument: --file");
        };
        let Some(target) = app.target.clone().or(config.target) else {
            bail!("missing required argument: --target");
        };

        let user = app.user.clone().or(config.user);
        let password = app.password.clone().or(config.password.map(String::from));

        let mut options = PublishOptions::default()
            .dry_run(app.dry_run || config.dry_run.unwrap_or(false))
            .sha256(app.sha256 || config.sha256.unwrap_or(false))
            .parameters(if app.parameters.is_empty() {
                config.parameters
            } else {
                app.parameters.clone()
            });

        match (user, password) {
            (Some(user), password) => options = options.credentials(Credentials::new(user, password)),
            (None, Some(_)) => bail!("--password requires --user"),
            (None, None) => {}
        }

        if let Some(proxy) = app.proxy.clone().or(config.proxy) {
            options = options.proxy(proxy);
        }

        Ok(Self {
            file,
            target,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn app(args: &[&str]) -> App {
        App::try_parse_from(std::iter::once("artipub").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_line_only() {
        let settings = Settings::merge(
            &app(&["-f", "a.jar", "-t", "https://repo/a.jar", "-u", "me"]),
            FileConfig::default(),
        )
        .unwrap();

        assert_eq!(settings.file, PathBuf::from("a.jar"));
        assert_eq!(settings.target, "https://repo/a.jar");
        let credentials = settings.options.credentials.unwrap();
        assert_eq!(credentials.username, "me");
        assert_eq!(credentials.password, None);
    }

    #[test]
    fn test_missing_target() {
        let err = Settings::merge(&app(&["-f", "a.jar"]), FileConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--target"));
    }

    #[test]
    fn test_password_requires_user() {
        let err = Settings::merge(
            &app(&["-f", "a.jar", "-t", "https://repo/a.jar", "-p", "pw"]),
            FileConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("--user"));
    }

    #[test]
    fn test_config_file_fills_gaps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("publish.json");
        std::fs::write(
            &path,
            r#"{
                "file": "from-config.jar",
                "t": "https://repo/from-config.jar",
                "user": "deployer",
                "password": 1234,
                "proxy": "http://proxy:3128",
                "parameters": ["build=7"],
                "dryRun": true
            }"#,
        )
        .unwrap();

        let cli = app(&["-c", path.to_str().unwrap(), "-f", "from-cli.jar"]);
        let settings = Settings::resolve(&cli).unwrap();

        assert_eq!(settings.file, PathBuf::from("from-cli.jar"));
        assert_eq!(settings.target, "https://repo/from-config.jar");
        assert_eq!(
            settings.options.credentials,
            Some(Credentials::new("deployer", Some("1234")))
        );
        assert_eq!(settings.options.proxy.as_deref(), Some("http://proxy:3128"));
        assert_eq!(settings.options.parameters, vec!["build=7"]);
        assert!(settings.options.dry_run);
        assert!(!settings.options.sha256);
    }

    #[test]
    fn test_command_line_parameters_replace_config() {
        let config = FileConfig {
            parameters: vec!["build=7".into()],
            ..FileConfig::default()
        };
        let settings = Settings::merge(
            &app(&["-f", "a", "-t", "https://repo/a", "--parameter", "build=8"]),
            config,
        )
        .unwrap();
        assert_eq!(settings.options.parameters, vec!["build=8"]);
    }

    #[test]
    fn test_unreadable_config() {
        let cli = app(&["-c", "/definitely/not/here.json"]);
        let err = Settings::resolve(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
