use aws_config::{BehaviorVersion, Region, SdkConfig, meta::region::RegionProviderChain};
use aws_sdk_sts::error::DisplayErrorContext;

use crate::{config::AwsReconConfig, error::SessionError};

/// An SDK config bound to one named profile whose credentials have been
/// confirmed against STS.
#[derive(Debug, Clone)]
pub struct ProfileSession {
    pub profile:    String,
    pub account_id: String,
    pub sdk_config: SdkConfig,
}

pub async fn load_profile_config(profile: &str, region: &str, config: &AwsReconConfig) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .profile_name(profile)
        .region(RegionProviderChain::first_try(Region::new(region.to_owned())))
        .timeout_config(config.timeout_config.to_sdk())
        .load()
        .await
}

/// Profile credentials are resolved lazily by the SDK, so a missing or broken
/// profile only surfaces on the first signed call. GetCallerIdentity is that call.
pub async fn verify_caller_identity(
    profile: &str,
    sdk_config: &SdkConfig,
    sts_region: &str,
) -> Result<String, SessionError> {
    let sts_config = aws_sdk_sts::config::Builder::from(sdk_config)
        .region(Region::new(sts_region.to_owned()))
        .build();
    let sts_client = aws_sdk_sts::Client::from_conf(sts_config);

    match sts_client.get_caller_identity().send().await {
        Ok(caller_identity) => {
            let Some(account_id) = caller_identity.account else {
                return Err(SessionError::MissingAccountId {
                    profile: profile.to_string(),
                });
            };
            Ok(account_id)
        }
        Err(e) => {
            tracing::debug!("sts:GetCallerIdentity for {}: {:?}", profile, e);
            Err(SessionError::CallerIdentity {
                profile: profile.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })
        }
    }
}

pub async fn open_profile_session(
    profile: &str,
    region: &str,
    config: &AwsReconConfig,
) -> Result<ProfileSession, SessionError> {
    let sdk_config = load_profile_config(profile, region, config).await;
    let account_id = verify_caller_identity(profile, &sdk_config, &config.sts_region).await?;

    tracing::debug!("Profile {} authenticated as account {}", profile, account_id);

    Ok(ProfileSession {
        profile: profile.to_string(),
        account_id,
        sdk_config,
    })
}
