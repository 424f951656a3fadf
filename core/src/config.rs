use std::{path::Path, time::Duration};

use anyhow::Context;
use ron::{Options, extensions::Extensions};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "aws/recon.ron";
pub const AWS_IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

/// Timeouts applied to every SDK client built from a profile, in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    pub connect:           u64,
    pub operation:         u64,
    pub operation_attempt: u64,
    pub read:              u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect:           30,
            operation:         30,
            operation_attempt: 30,
            read:              30,
        }
    }
}

impl TimeoutConfig {
    pub fn to_sdk(&self) -> aws_config::timeout::TimeoutConfig {
        aws_config::timeout::TimeoutConfig::builder()
            .connect_timeout(Duration::from_secs(self.connect))
            .operation_timeout(Duration::from_secs(self.operation))
            .operation_attempt_timeout(Duration::from_secs(self.operation_attempt))
            .read_timeout(Duration::from_secs(self.read))
            .build()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AwsReconConfig {
    /// Region used for sts:GetCallerIdentity when authenticating a profile.
    pub sts_region:       String,
    /// Route53 is a global service, but the SDK still wants a signing region.
    pub route53_region:   String,
    /// Upper bound on hosted zones listed per profile.
    pub max_hosted_zones: i32,
    pub ip_ranges_url:    String,
    pub timeout_config:   TimeoutConfig,
}

impl Default for AwsReconConfig {
    fn default() -> Self {
        Self {
            sts_region:       String::from("us-east-1"),
            route53_region:   String::from("us-east-1"),
            max_hosted_zones: 300,
            ip_ranges_url:    String::from(AWS_IP_RANGES_URL),
            timeout_config:   TimeoutConfig::default(),
        }
    }
}

impl AwsReconConfig {
    pub fn try_load(config_path: &Path) -> anyhow::Result<AwsReconConfig> {
        if config_path.is_file() {
            tracing::info!("Loading aws-recon config file at {:?}", config_path);
            let s = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file {:?}", config_path))?;
            Self::from_ron(&s).with_context(|| format!("Failed to parse config file {:?}", config_path))
        } else {
            tracing::info!("aws-recon config file at {:?} not present, skipping.", config_path);
            Ok(AwsReconConfig::default())
        }
    }

    pub fn from_ron(s: &str) -> anyhow::Result<AwsReconConfig> {
        let options = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(s)?)
    }
}
