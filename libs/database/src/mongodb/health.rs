use mongodb::{Client, bson::doc};

use crate::common::{DatabaseError, DatabaseResult};

/// Send `{ping: 1}` to the admin database
///
/// # Example
/// ```ignore
/// use database::mongodb::{connect_from_config, ping, MongoConfig};
///
/// let client = connect_from_config(&MongoConfig::default()).await?;
/// let ready = ping(&client).await.is_ok();
/// ```
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

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_ping() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        assert!(ping(&client).await.is_ok());
    }
}
