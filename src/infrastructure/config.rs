/// DynamoDB connection settings
///
/// Environment variables:
/// - TABLE_NAME: DynamoDB table holding notes (required)
/// - AWS_REGION: AWS region (default: us-east-2)
/// - DYNAMODB_ENDPOINT_URL: endpoint override, e.g. DynamoDB Local (optional)
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// Table name variable
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Region variable
pub const REGION_VAR: &str = "AWS_REGION";

/// Endpoint override variable
pub const ENDPOINT_URL_VAR: &str = "DYNAMODB_ENDPOINT_URL";

/// Region used when AWS_REGION is not set
pub const DEFAULT_REGION: &str = "us-east-2";

/// Configuration error type
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Store settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Notes table name
    pub table_name: String,
    /// AWS region
    pub region: String,
    /// DynamoDB endpoint override
    pub endpoint_url: Option<String>,
}

impl StoreSettings {
    /// Read settings from environment variables
    ///
    /// Blank values are treated as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let get_optional_string = |key: &str| -> Option<String> {
            std::env::var(key)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let table_name = get_optional_string(TABLE_NAME_VAR)
            .ok_or_else(|| ConfigError::MissingEnvVar(TABLE_NAME_VAR.to_string()))?;
        let region = get_optional_string(REGION_VAR).unwrap_or_else(|| DEFAULT_REGION.to_string());
        let endpoint_url = get_optional_string(ENDPOINT_URL_VAR);

        Ok(Self {
            table_name,
            region,
            endpoint_url,
        })
    }
}

/// DynamoDB client together with the notes table name
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDB client instance
    client: DynamoDbClient,
    /// Notes table name
    table_name: String,
}

impl DynamoDbConfig {
    /// Load AWS configuration and table name from the environment
    ///
    /// Credentials are resolved by aws-config's default provider chain.
    pub async fn from_env() -> Result<Self, ConfigError> {
        let settings = StoreSettings::from_env()?;
        Ok(Self::from_settings(&settings).await)
    }

    /// Build a client for the given settings
    pub async fn from_settings(settings: &StoreSettings) -> Self {
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&aws_config);
        if let Some(endpoint_url) = &settings.endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }

        Self {
            client: DynamoDbClient::from_conf(builder.build()),
            table_name: settings.table_name.clone(),
        }
    }

    /// Reference to the DynamoDB client
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// Notes table name
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Rust 2024: set_var/remove_var are unsafe; env tests run under #[serial]
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    unsafe fn cleanup() {
        unsafe {
            remove_env(TABLE_NAME_VAR);
            remove_env(REGION_VAR);
            remove_env(ENDPOINT_URL_VAR);
        }
    }

    #[test]
    fn test_missing_env_var_error_display() {
        let error = ConfigError::MissingEnvVar("TABLE_NAME".to_string());
        assert_eq!(error.to_string(), "Missing environment variable: TABLE_NAME");
    }

    #[test]
    #[serial(notes_env)]
    fn test_from_env_requires_table_name() {
        unsafe { cleanup() };

        let result = StoreSettings::from_env();

        assert_eq!(
            result,
            Err(ConfigError::MissingEnvVar("TABLE_NAME".to_string()))
        );
    }

    #[test]
    #[serial(notes_env)]
    fn test_from_env_blank_table_name_is_missing() {
        unsafe {
            cleanup();
            set_env(TABLE_NAME_VAR, "   ");
        }

        let result = StoreSettings::from_env();

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
        unsafe { cleanup() };
    }

    #[test]
    #[serial(notes_env)]
    fn test_from_env_defaults() {
        unsafe {
            cleanup();
            set_env(TABLE_NAME_VAR, "notes-table");
        }

        let settings = StoreSettings::from_env().unwrap();

        assert_eq!(settings.table_name, "notes-table");
        assert_eq!(settings.region, DEFAULT_REGION);
        assert_eq!(settings.endpoint_url, None);
        unsafe { cleanup() };
    }

    #[test]
    #[serial(notes_env)]
    fn test_from_env_all_values() {
        unsafe {
            cleanup();
            set_env(TABLE_NAME_VAR, "notes-table");
            set_env(REGION_VAR, "ap-northeast-1");
            set_env(ENDPOINT_URL_VAR, "http://localhost:8000");
        }

        let settings = StoreSettings::from_env().unwrap();

        assert_eq!(
            settings,
            StoreSettings {
                table_name: "notes-table".to_string(),
                region: "ap-northeast-1".to_string(),
                endpoint_url: Some("http://localhost:8000".to_string()),
            }
        );
        unsafe { cleanup() };
    }

    #[tokio::test]
    #[serial(notes_env)]
    async fn test_from_settings_applies_region_and_table() {
        let settings = StoreSettings {
            table_name: "notes-table".to_string(),
            region: "eu-west-1".to_string(),
            endpoint_url: Some("http://localhost:8000".to_string()),
        };

        let config = DynamoDbConfig::from_settings(&settings).await;

        assert_eq!(config.table_name(), "notes-table");
        assert_eq!(
            config.client().config().region().map(|r| r.to_string()),
            Some("eu-west-1".to_string())
        );
    }

    #[tokio::test]
    #[serial(notes_env)]
    async fn test_from_env_missing_table_name() {
        unsafe { cleanup() };

        let result = DynamoDbConfig::from_env().await;

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "TABLE_NAME"));
    }
}
