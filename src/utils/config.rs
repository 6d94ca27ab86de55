use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_credential_types::Credentials;

/// Laufzeitkonfiguration des Service
#[derive(Debug, Clone)]
pub struct Config {
    /// "dev" (Default) oder Name der echten Umgebung
    pub environment: String,
    pub port: u16,
    pub aws_region: String,
    /// Endpoint der lokalen DynamoDB-Instanz, nur im dev-Profil benutzt
    pub dynamodb_endpoint: String,
}

impl Config {
    /// Lade Config aus Environment Variablen
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("PORT must be a number"),
            aws_region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-west-2".to_string()),
            dynamodb_endpoint: std::env::var("DYNAMODB_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        }
    }

    pub fn is_dev(&self) -> bool {
        self.environment == "dev"
    }

    /// SDK-Konfiguration für die gewählte Umgebung: dev spricht die lokale
    /// DynamoDB-Instanz mit statischen Dummy-Credentials an, alles andere
    /// nutzt die Default-Kette des SDK.
    pub async fn aws_sdk_config(&self) -> SdkConfig {
        let defaults = aws_config::load_defaults(BehaviorVersion::latest()).await;

        if !self.is_dev() {
            return defaults;
        }

        defaults
            .into_builder()
            .endpoint_url(self.dynamodb_endpoint.as_str())
            .region(Region::new(self.aws_region.clone()))
            .credentials_provider(SharedCredentialsProvider::new(Credentials::new(
                "empty", "empty", None, None, "static",
            )))
            .build()
    }
}
