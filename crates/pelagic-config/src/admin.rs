use crate::preview::{DEFAULT_CLIENT_URL, DEFAULT_PREVIEW_SECRET, PreviewConfig};

pub const ENV_ADMIN_JWT_SECRET: &str = "ADMIN_JWT_SECRET";
pub const ENV_API_TOKEN_SALT: &str = "API_TOKEN_SALT";
pub const ENV_TRANSFER_TOKEN_SALT: &str = "TRANSFER_TOKEN_SALT";
pub const ENV_FLAG_NPS: &str = "FLAG_NPS";
pub const ENV_FLAG_PROMOTE_EE: &str = "FLAG_PROMOTE_EE";
pub const ENV_CLIENT_URL: &str = "CLIENT_URL";
pub const ENV_PREVIEW_SECRET: &str = "PREVIEW_SECRET";

/// Admin panel feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminFlags {
    pub nps: bool,
    pub promote_ee: bool,
}

impl Default for AdminFlags {
    fn default() -> Self {
        Self {
            nps: true,
            promote_ee: true,
        }
    }
}

/// Admin panel settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminConfig {
    pub auth_secret: Option<String>,
    pub api_token_salt: Option<String>,
    pub transfer_token_salt: Option<String>,
    pub flags: AdminFlags,
    pub preview: PreviewConfig,
}

impl AdminConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let boolean = |key: &str, default: bool| match lookup(key) {
            Some(v) => v == "true",
            None => default,
        };

        Self {
            auth_secret: string(ENV_ADMIN_JWT_SECRET),
            api_token_salt: string(ENV_API_TOKEN_SALT),
            transfer_token_salt: string(ENV_TRANSFER_TOKEN_SALT),
            flags: AdminFlags {
                nps: boolean(ENV_FLAG_NPS, true),
                promote_ee: boolean(ENV_FLAG_PROMOTE_EE, true),
            },
            preview: PreviewConfig {
                enabled: true,
                client_url: string(ENV_CLIENT_URL).unwrap_or_else(|| DEFAULT_CLIENT_URL.into()),
                secret: string(ENV_PREVIEW_SECRET)
                    .unwrap_or_else(|| DEFAULT_PREVIEW_SECRET.into()),
            },
        }
    }

    /// Names of unset secrets the admin panel needs to sign tokens.
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        [
            (ENV_ADMIN_JWT_SECRET, &self.auth_secret),
            (ENV_API_TOKEN_SALT, &self.api_token_salt),
            (ENV_TRANSFER_TOKEN_SALT, &self.transfer_token_salt),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect()
    }
}
