use crate::error::Error;
use serde_json::json;

/// Where the finished report goes. The pipeline only produces the string;
/// delivery is the caller's concern.
#[allow(async_fn_in_trait)]
pub trait MessageSink {
    async fn deliver(&self, text: &str) -> Result<(), Error>;
}

/// Posts the report to a Discord channel webhook, prefixed with a role
/// mention when a group id is configured.
pub struct DiscordWebhookSink {
    client: reqwest::Client,
    webhook_url: String,
    group_id: Option<String>,
}

impl DiscordWebhookSink {
    pub fn new(client: reqwest::Client, webhook_url: String, group_id: Option<String>) -> Self {
        DiscordWebhookSink {
            client,
            webhook_url,
            group_id,
        }
    }

    fn content(&self, text: &str) -> String {
        match &self.group_id {
            Some(group_id) => format!("<@&{group_id}>\n\n{text}"),
            None => text.to_string(),
        }
    }
}

impl MessageSink for DiscordWebhookSink {
    async fn deliver(&self, text: &str) -> Result<(), Error> {
        self.client
            .post(&self.webhook_url)
            .json(&json!({ "content": self.content(text) }))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(Error::Delivery)?;
        tracing::info!("report delivered to Discord");
        Ok(())
    }
}

/// Prints the report to stdout; the fallback when no webhook is configured.
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    async fn deliver(&self, text: &str) -> Result<(), Error> {
        println!("{text}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_mention_prefixes_the_report() {
        let sink = DiscordWebhookSink::new(
            reqwest::Client::new(),
            "https://discord.example/webhook".to_string(),
            Some("123456".to_string()),
        );
        assert_eq!(sink.content("raportti"), "<@&123456>\n\nraportti");
    }

    #[test]
    fn no_group_means_no_mention() {
        let sink = DiscordWebhookSink::new(
            reqwest::Client::new(),
            "https://discord.example/webhook".to_string(),
            None,
        );
        assert_eq!(sink.content("raportti"), "raportti");
    }
}
