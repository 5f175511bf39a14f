use crate::AppError;
use crate::api::client::EagleClient;
use crate::api::models::{ItemListParams, MoveToTrashParams};
use crate::schema::Item;

/// Outcome of [`ItemService::trash_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashSummary {
    /// Number of item IDs submitted to the trash endpoint.
    pub submitted: usize,
    pub rounds: usize,
    /// `false` when the round limit was hit with items still listed.
    pub complete: bool,
}

/// Item workflows that span several API calls.
pub struct ItemService {
    client: EagleClient,
}

impl ItemService {
    pub fn new(client: EagleClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ItemListParams) -> Result<Vec<Item>, AppError> {
        Ok(self.client.get_item_list(params).await?)
    }

    /// Items carrying every tag in `tags`.
    ///
    /// The server-side tag filter is applied first, then re-checked locally.
    pub async fn find_by_tags(&self, tags: &[String]) -> Result<Vec<Item>, AppError> {
        let params = ItemListParams {
            tags: Some(tags.to_vec()),
            ..Default::default()
        };
        let items = self.client.get_item_list(&params).await?;
        Ok(items.into_iter().filter(|item| item.has_tags(tags)).collect())
    }

    /// Move every listed item to the trash, one page of `batch_size` at a
    /// time, until the list comes back empty or `max_rounds` is reached.
    pub async fn trash_all(
        &self,
        batch_size: u32,
        max_rounds: usize,
    ) -> Result<TrashSummary, AppError> {
        let mut summary = TrashSummary {
            submitted: 0,
            rounds: 0,
            complete: false,
        };

        while summary.rounds < max_rounds {
            let params = ItemListParams {
                limit: Some(batch_size),
                ..Default::default()
            };
            let items = self.client.get_item_list(&params).await?;
            if items.is_empty() {
                summary.complete = true;
                return Ok(summary);
            }

            let item_ids: Vec<String> = items.into_iter().map(|item| item.id).collect();
            log::debug!("Moving {} items to trash", item_ids.len());
            summary.submitted += item_ids.len();
            self.client
                .move_items_to_trash(&MoveToTrashParams { item_ids })
                .await?;
            summary.rounds += 1;
        }

        // One last look so a final successful round still counts as complete.
        let remaining = self
            .client
            .get_item_list(&ItemListParams {
                limit: Some(1),
                ..Default::default()
            })
            .await?;
        summary.complete = remaining.is_empty();
        if !summary.complete {
            log::warn!(
                "Items still listed after {} trash rounds",
                summary.rounds
            );
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientConfig;
    use crate::api::testing::{FakeTransport, response};
    use crate::error::ApiError;
    use serde_json::json;

    fn item(id: &str, tags: &[&str]) -> serde_json::Value {
        json!({
            "id": id,
            "name": id,
            "size": 1,
            "ext": "png",
            "tags": tags,
            "folders": [],
            "isDeleted": false,
            "url": "",
            "annotation": "",
            "modificationTime": 1,
            "width": 1,
            "height": 1,
            "lastModified": 1,
            "palettes": []
        })
    }

    fn list_body(items: Vec<serde_json::Value>) -> String {
        json!({"status": "success", "data": items}).to_string()
    }

    const ACK: &str = r#"{"status":"success"}"#;

    fn service(transport: std::sync::Arc<FakeTransport>) -> ItemService {
        ItemService::new(EagleClient::with_transport(ClientConfig::default(), transport))
    }

    #[tokio::test]
    async fn test_trash_all_until_empty() {
        let transport = FakeTransport::new(vec![
            Ok(response(200, &list_body(vec![item("A", &[]), item("B", &[])]))),
            Ok(response(200, ACK)),
            Ok(response(200, &list_body(vec![item("C", &[])]))),
            Ok(response(200, ACK)),
            Ok(response(200, &list_body(vec![]))),
        ]);
        let summary = service(transport.clone()).trash_all(200, 10).await.unwrap();

        assert_eq!(
            summary,
            TrashSummary {
                submitted: 3,
                rounds: 2,
                complete: true
            }
        );
        let requests = transport.requests();
        assert_eq!(requests.len(), 5);
        assert_eq!(requests[1].body.as_deref(), Some(r#"{"itemIds":["A","B"]}"#));
    }

    #[tokio::test]
    async fn test_trash_all_stops_at_round_limit() {
        let stuck = list_body(vec![item("A", &[])]);
        let transport = FakeTransport::new(vec![
            Ok(response(200, &stuck)),
            Ok(response(200, ACK)),
            Ok(response(200, &stuck)),
            Ok(response(200, ACK)),
            Ok(response(200, &stuck)),
        ]);
        let summary = service(transport).trash_all(50, 2).await.unwrap();

        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.submitted, 2);
        assert!(!summary.complete);
    }

    #[tokio::test]
    async fn test_trash_all_propagates_errors() {
        let transport = FakeTransport::new(vec![
            Ok(response(200, &list_body(vec![item("A", &[])]))),
            Ok(response(500, r#"{"status":"error","data":"disk full"}"#)),
        ]);
        let err = service(transport).trash_all(50, 5).await.unwrap_err();
        assert!(matches!(err, AppError::Api(ApiError::Server { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_find_by_tags_filters_locally() {
        let transport = FakeTransport::replying(
            200,
            &list_body(vec![item("A", &["x", "y"]), item("B", &["x"])]),
        );
        let tags = vec!["x".to_string(), "y".to_string()];
        let items = service(transport.clone()).find_by_tags(&tags).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "A");
        assert_eq!(
            transport.requests()[0].query,
            vec![
                ("tags".to_string(), "x".to_string()),
                ("tags".to_string(), "y".to_string()),
            ]
        );
    }
}
