use std::{env, time::Duration};

use blogapi_core::auth::UserPool;
use blogapi_core::pagination::DEFAULT_PAGE_LIMIT;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (local development).
    Pretty,
    /// One JSON object per event (CloudWatch).
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding posts (default: "Posts")
    pub posts_table_name: String,
    /// DynamoDB endpoint override, e.g. DynamoDB Local (default: none)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_endpoint: Option<String>,
    /// Page size when a list request has no `limit` (default: 10)
    pub default_page_limit: i32,
    /// Cognito user pool ID (default: "")
    pub user_pool_id: String,
    /// Cognito app client ID (default: "")
    pub user_pool_client_id: String,
    /// Region for the identity client (default: "us-east-1")
    #[allow(dead_code)]
    pub aws_region: String,
    /// Parameter names of the three secrets read before building the identity client.
    pub access_key_id_param: String,
    pub secret_access_key_param: String,
    pub client_secret_param: String,
    /// `user:password` pairs for the mock identity provider (default: none)
    /// Note: Only used without the `cognito` feature.
    #[allow(dead_code)]
    pub mock_users: String,
    /// Request timeout for the local server in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Log format (default: JSON under Lambda, pretty otherwise)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POSTS_TABLE_NAME` - DynamoDB table name (default: "Posts")
    /// - `DYNAMODB_ENDPOINT` - DynamoDB endpoint override (default: unset)
    /// - `DEFAULT_PAGE_LIMIT` - Default list page size (default: 10)
    /// - `USER_POOL_ID` - Cognito user pool ID
    /// - `USER_POOL_CLIENT_ID` - Cognito app client ID
    /// - `AWS_REGION` - Region for the identity client (default: "us-east-1")
    /// - `ACCESS_KEY_ID_PARAM` - Parameter name of the access key ID (default: "access_key_id")
    /// - `SECRET_ACCESS_KEY_PARAM` - Parameter name of the secret key (default: "secret_access_key")
    /// - `CLIENT_SECRET_PARAM` - Parameter name of the app client secret (default: "client_secret")
    /// - `MOCK_USERS` - Mock identity provider users, `user:password,...` (default: none)
    /// - `REQUEST_TIMEOUT_SECONDS` - Local server request timeout (default: 10)
    /// - `LOG_FORMAT` - "json" or "pretty" (default: "json" when `AWS_LAMBDA_FUNCTION_NAME` is set)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            _ if lookup("AWS_LAMBDA_FUNCTION_NAME").is_some() => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            posts_table_name: lookup("POSTS_TABLE_NAME").unwrap_or_else(|| "Posts".to_string()),
            dynamodb_endpoint: lookup("DYNAMODB_ENDPOINT").filter(|v| !v.is_empty()),
            default_page_limit: lookup("DEFAULT_PAGE_LIMIT")
                .and_then(|v| v.parse().ok())
                .filter(|limit: &i32| *limit >= 1)
                .unwrap_or(DEFAULT_PAGE_LIMIT),
            user_pool_id: lookup("USER_POOL_ID").unwrap_or_default(),
            user_pool_client_id: lookup("USER_POOL_CLIENT_ID").unwrap_or_default(),
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            access_key_id_param: lookup("ACCESS_KEY_ID_PARAM")
                .unwrap_or_else(|| "access_key_id".to_string()),
            secret_access_key_param: lookup("SECRET_ACCESS_KEY_PARAM")
                .unwrap_or_else(|| "secret_access_key".to_string()),
            client_secret_param: lookup("CLIENT_SECRET_PARAM")
                .unwrap_or_else(|| "client_secret".to_string()),
            mock_users: lookup("MOCK_USERS").unwrap_or_default(),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_format,
        }
    }

    /// The user pool logins are made against.
    pub fn user_pool(&self) -> UserPool {
        UserPool::new(&self.user_pool_id, &self.user_pool_client_id)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
