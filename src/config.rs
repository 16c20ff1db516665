//! 应用配置 (~/.config/quizterm/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::TierConfig;
use crate::error::ConfigError;

pub const DEFAULT_LOG_FILTER: &str = "quizterm=info";

/// 配置文件结构，所有字段可省略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 默认题库路径
    pub quiz_file: Option<PathBuf>,
    /// 日志过滤规则，`RUST_LOG` 优先
    pub log_filter: String,
    /// 结算评语
    #[serde(flatten)]
    pub tiers: TierConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiz_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tiers: TierConfig::default(),
        }
    }
}

impl Config {
    /// 读取配置，文件不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 题库路径：命令行参数 > 配置 > 数据目录下的 questions.toml
    pub fn resolve_quiz_path(&self, arg: Option<PathBuf>, data_dir: &Path) -> PathBuf {
        arg.or_else(|| self.quiz_file.clone())
            .unwrap_or_else(|| data_dir.join("questions.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tiers.tiers.len(), 3);
    }

    #[test]
    fn test_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
quiz_file = "/tmp/react.toml"

[[tiers]]
min_percent = 80
message = "nice"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.quiz_file, Some(PathBuf::from("/tmp/react.toml")));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.tiers.message_for(85), "nice");
        assert_eq!(config.tiers.message_for(50), TierConfig::default().fallback);
    }

    #[test]
    fn test_config_without_tiers_keeps_default_tiers() {
        let defaults = TierConfig::default();

        let config: Config = toml::from_str(r#"quiz_file = "/tmp/q.toml""#).unwrap();
        assert_eq!(config.tiers.tiers.len(), 3);
        assert_eq!(config.tiers.message_for(100), defaults.tiers[0].message);

        let config: Config = toml::from_str(r#"fallback = "again""#).unwrap();
        assert_eq!(config.tiers.tiers.len(), 3);
        assert_eq!(config.tiers.message_for(100), defaults.tiers[0].message);
        assert_eq!(config.tiers.message_for(30), "again");
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_filter = 42").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_resolve_quiz_path() {
        let data_dir = Path::new("/data");
        let mut config = Config::default();
        assert_eq!(
            config.resolve_quiz_path(None, data_dir),
            PathBuf::from("/data/questions.toml")
        );

        config.quiz_file = Some(PathBuf::from("/cfg.toml"));
        assert_eq!(config.resolve_quiz_path(None, data_dir), PathBuf::from("/cfg.toml"));
        assert_eq!(
            config.resolve_quiz_path(Some(PathBuf::from("arg.toml")), data_dir),
            PathBuf::from("arg.toml")
        );
    }
}
