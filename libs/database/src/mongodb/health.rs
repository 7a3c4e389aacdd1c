use mongodb::Client;
use mongodb::bson::doc;

use crate::common::{DatabaseError, DatabaseResult};

/// Run the `ping` admin command
pub async fn ping(client: &Client) -> DatabaseResult<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mongodb::MongoConfig;
    use crate::mongodb::client_options;

    #[tokio::test]
    async fn test_ping_unreachable_server_is_health_check_failure() {
        let config = MongoConfig::new("mongodb://127.0.0.1:1")
            .with_pool_size(1, 0);
        let mut options = client_options(&config).await.unwrap();
        options.server_selection_timeout = Some(std::time::Duration::from_millis(200));
        let client = Client::with_options(options).unwrap();

        assert!(matches!(
            ping(&client).await,
            Err(DatabaseError::HealthCheckFailed(_))
        ));
    }
}
