//! Built-in records used when the data document cannot be loaded.

use super::aggregate::Platform;

const MAINTAINER: &str = "loft-maintainer";

fn maintained(mut platform: Platform) -> Platform {
    platform.contributor = Some(MAINTAINER.to_string());
    platform
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Six example records: Email, Development, Storage (x2), Communication (x2).
pub fn fallback_platforms() -> Vec<Platform> {
    vec![
        maintained(Platform {
            trial: some("N/A"),
            developer_account: some("N/A"),
            phishing_description: some(
                "Encrypted email service commonly abused for phishing campaigns due to privacy features",
            ),
            ..Platform::new(
                "ProtonMail",
                "https://protonmail.com",
                "Email",
                "500MB storage, 150 messages/day",
            )
            .with_tags(["Free Tier", "Phishing"])
        }),
        maintained(Platform {
            trial: some("N/A"),
            developer_account: some("Free for developers"),
            dev_tier_description: some(
                "Platform provides development tools and repositories for legitimate and malicious projects",
            ),
            download_description: some("Public repositories can host malicious payloads and tools"),
            cc_description: some("Issues and wikis can be used for command and control communication"),
            sso_description: some(
                "Enterprise GitHub supports SAML/OIDC integration for organizational single sign-on",
            ),
            ..Platform::new(
                "GitHub",
                "https://github.com",
                "Development",
                "Unlimited public repos, 2000 Actions minutes",
            )
            .with_tags(["Free Tier", "Dev Tier", "Download", "C&C", "SSO"])
        }),
        maintained(Platform {
            trial: some("30 days Business features"),
            developer_account: some("N/A"),
            download_description: some("Shared links commonly used to distribute malicious files"),
            exfiltration_description: some("File synchronization can be abused for data exfiltration"),
            ..Platform::new(
                "Dropbox",
                "https://dropbox.com",
                "Storage",
                "2GB storage, file sharing",
            )
            .with_tags(["Free Tier", "Trial", "Download", "Exfiltration"])
        }),
        maintained(Platform {
            trial: some("N/A"),
            developer_account: some("Bot development API"),
            dev_tier_description: some("Bot API allows automated interactions and data collection"),
            cc_description: some("Channels and DMs used for command and control operations"),
            exfiltration_description: some("File uploads and webhooks enable data exfiltration"),
            sso_description: some(
                "Discord supports OAuth integration with external identity providers for server authentication",
            ),
            ..Platform::new(
                "Discord",
                "https://discord.com",
                "Communication",
                "Unlimited messaging, voice, video",
            )
            .with_tags(["Free Tier", "Dev Tier", "C&C", "Exfiltration", "SSO"])
        }),
        maintained(Platform {
            trial: some("N/A"),
            developer_account: some("API access available"),
            dev_tier_description: some("API allows programmatic paste creation and retrieval"),
            cc_description: some("Anonymous pastes used for sharing commands and configurations"),
            download_description: some("Raw paste URLs used to host and distribute malicious scripts"),
            ..Platform::new(
                "Pastebin",
                "https://pastebin.com",
                "Storage",
                "Unlimited public pastes",
            )
            .with_tags(["Free Tier", "Dev Tier", "C&C", "Download"])
        }),
        maintained(Platform {
            trial: some("N/A"),
            developer_account: some("Bot API available"),
            dev_tier_description: some("Bot API enables automated messaging and file operations"),
            cc_description: some("Channels and bots commonly used for command distribution"),
            exfiltration_description: some("Large file support and bots enable data exfiltration"),
            ..Platform::new(
                "Telegram",
                "https://telegram.org",
                "Communication",
                "Unlimited messaging, file sharing up to 2GB",
            )
            .with_tags(["Free Tier", "Dev Tier", "C&C", "Exfiltration"])
        }),
    ]
}
