use serde::{Deserialize, Serialize};

/// 一档评语：正确率不低于 `min_percent` 时使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub min_percent: u32,
    pub message: String,
}

/// 结算评语配置，由调用方提供
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierConfig {
    #[serde(default = "default_tiers")]
    pub tiers: Vec<Tier>,
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_fallback() -> String {
    "📚 还需要加强，建议回顾相关内容后再试一次".to_string()
}

fn default_tiers() -> Vec<Tier> {
    vec![
        Tier {
            min_percent: 90,
            message: "🏆 太棒了！你已经完全掌握了这些内容".to_string(),
        },
        Tier {
            min_percent: 70,
            message: "👍 做得不错，继续保持".to_string(),
        },
        Tier {
            min_percent: 60,
            message: "✅ 及格了，部分知识点还可以巩固".to_string(),
        },
    ]
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            fallback: default_fallback(),
        }
    }
}

impl TierConfig {
    /// 选取门槛最高且不超过正确率的一档
    pub fn message_for(&self, accuracy_percent: u32) -> &str {
        self.tiers
            .iter()
            .filter(|tier| accuracy_percent >= tier.min_percent)
            .max_by_key(|tier| tier.min_percent)
            .map_or(self.fallback.as_str(), |tier| tier.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries() {
        let config = TierConfig::default();
        assert_eq!(config.message_for(100), config.tiers[0].message);
        assert_eq!(config.message_for(90), config.tiers[0].message);
        assert_eq!(config.message_for(89), config.tiers[1].message);
        assert_eq!(config.message_for(70), config.tiers[1].message);
        assert_eq!(config.message_for(60), config.tiers[2].message);
        assert_eq!(config.message_for(59), config.fallback);
        assert_eq!(config.message_for(0), config.fallback);
    }

    #[test]
    fn test_custom_tiers_in_any_order() {
        let config = TierConfig {
            tiers: vec![
                Tier {
                    min_percent: 50,
                    message: "half".to_string(),
                },
                Tier {
                    min_percent: 80,
                    message: "great".to_string(),
                },
            ],
            fallback: "try again".to_string(),
        };
        assert_eq!(config.message_for(85), "great");
        assert_eq!(config.message_for(67), "half");
        assert_eq!(config.message_for(10), "try again");
    }

    #[test]
    fn test_parse_from_toml() {
        let config: TierConfig = toml::from_str(
            r#"
fallback = "again"

[[tiers]]
min_percent = 75
message = "ok"
"#,
        )
        .unwrap();
        assert_eq!(config.message_for(80), "ok");
        assert_eq!(config.message_for(74), "again");
    }

    #[test]
    fn test_missing_tiers_keep_defaults() {
        let config: TierConfig = toml::from_str(r#"fallback = "again""#).unwrap();
        assert_eq!(config.tiers, TierConfig::default().tiers);
        assert_eq!(config.message_for(95), TierConfig::default().tiers[0].message);
        assert_eq!(config.message_for(10), "again");
    }
}
