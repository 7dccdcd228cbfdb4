//! The bird catalog store
//!
//! Mirrors the remote catalog with confirmed-only updates: the local list
//! changes only after the service acknowledges a mutation, never
//! optimistically. The store is the sole mutator of the bird collection;
//! views read through the accessors and call the operations.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::http::Transport;
use crate::wire::{BirdPayload, BirdRecord};
use aves_domain::{Bird, NewBird};

const BIRDS_PATH: &str = "/api/birds";

/// Fixed message shown when the initial catalog load fails.
pub const LOAD_ERROR_MESSAGE: &str = "No se pudieron cargar las aves";

pub struct BirdCatalog<T: Transport> {
    gateway: Gateway<T>,
    birds: Vec<Bird>,
    loading: bool,
    error: Option<String>,
}

impl<T: Transport> BirdCatalog<T> {
    /// A catalog starts empty and loading; call [`load`](Self::load) once to
    /// populate it.
    pub fn new(gateway: Gateway<T>) -> Self {
        Self {
            gateway,
            birds: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The load-failure message, if the last load failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the full catalog and replace local state.
    ///
    /// Runs once at initialization. Failure is absorbed into the error slot
    /// rather than returned: there is no caller to hand it to at that point.
    /// The loading flag drops last, on every path.
    pub async fn load(&mut self) {
        match self.gateway.get_json::<Vec<BirdRecord>>(BIRDS_PATH).await {
            Ok(records) => {
                self.birds = records.into_iter().map(BirdRecord::into_bird).collect();
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Could not load bird catalog: {}", e);
                self.birds.clear();
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Create a bird. Appends the server's returned representation to the
    /// end of the local list and hands it back.
    pub async fn create(&mut self, new: NewBird) -> Result<Bird, ApiError> {
        let payload = BirdPayload::from(new);
        let record: BirdRecord = self
            .gateway
            .post_json(BIRDS_PATH, &payload)
            .await
            .map_err(|e| {
                tracing::error!("Bird create failed: {}", e);
                e
            })?;
        let bird = record.into_bird();
        self.birds.push(bird.clone());
        Ok(bird)
    }

    /// Replace the bird with the given id by the server's returned
    /// representation. A full-field replace, not a merge; an id absent from
    /// the local list leaves it unchanged.
    pub async fn update(&mut self, id: i64, new: NewBird) -> Result<Bird, ApiError> {
        let payload = BirdPayload::from(new);
        let record: BirdRecord = self
            .gateway
            .put_json(&format!("{BIRDS_PATH}/{id}"), &payload)
            .await
            .map_err(|e| {
                tracing::error!("Bird update failed for id {}: {}", id, e);
                e
            })?;
        let bird = record.into_bird();
        if let Some(slot) = self.birds.iter_mut().find(|b| b.id == id) {
            *slot = bird.clone();
        }
        Ok(bird)
    }

    /// Delete the bird with the given id. Once the remote call succeeds,
    /// removing an id that is not in the local list is a no-op.
    pub async fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        self.gateway
            .delete(&format!("{BIRDS_PATH}/{id}"))
            .await
            .map_err(|e| {
                tracing::error!("Bird delete failed for id {}: {}", id, e);
                e
            })?;
        self.birds.retain(|b| b.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::PERMISSION_DENIED_MESSAGE;
    use crate::http::Method;
    use crate::testing::MockTransport;
    use aves_domain::{Role, Session};

    fn record_json(id: i64, name: &str) -> String {
        format!(
            r#"{{"birdId": {id}, "name": "{name}", "scientificname": "Sci {name}",
                "description": "desc", "image": "https://example.cl/{id}.jpg"}}"#
        )
    }

    fn admin_catalog(transport: MockTransport) -> BirdCatalog<MockTransport> {
        let mut session = Session::anonymous();
        session.login("tok-admin".into(), "maria".into(), Role::Admin);
        BirdCatalog::new(Gateway::new(
            transport,
            ClientConfig::default(),
            session.into_handle(),
        ))
    }

    fn new_bird(name: &str) -> NewBird {
        NewBird {
            name: name.into(),
            scientific_name: format!("Sci {name}"),
            description: "desc".into(),
            image: "img".into(),
        }
    }

    #[tokio::test]
    async fn load_remaps_server_ids() {
        let transport = MockTransport::new();
        transport.push_status(
            200,
            &format!("[{},{}]", record_json(5, "Chucao"), record_json(9, "Loica")),
        );
        let mut catalog = admin_catalog(transport);
        assert!(catalog.is_loading());

        catalog.load().await;
        assert!(!catalog.is_loading());
        assert_eq!(catalog.error(), None);
        assert_eq!(catalog.birds().len(), 2);
        assert_eq!(catalog.birds()[0].id, 5);
        assert_eq!(catalog.birds()[1].id, 9);
    }

    #[tokio::test]
    async fn load_failure_sets_fixed_error_and_clears_loading() {
        let transport = MockTransport::new();
        transport.push_network_error("connection refused");
        let mut catalog = admin_catalog(transport);

        catalog.load().await;
        assert!(!catalog.is_loading());
        assert!(catalog.birds().is_empty());
        assert_eq!(catalog.error(), Some(LOAD_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn load_non_2xx_also_absorbed() {
        let transport = MockTransport::new();
        transport.push_status(500, "internal");
        let mut catalog = admin_catalog(transport);

        catalog.load().await;
        assert_eq!(catalog.error(), Some(LOAD_ERROR_MESSAGE));
        assert!(!catalog.is_loading());
    }

    #[tokio::test]
    async fn create_appends_after_server_ack() {
        let transport = MockTransport::new();
        transport.push_status(200, "[]");
        transport.push_status(201, &record_json(7, "Chucao"));
        let mut catalog = admin_catalog(transport);
        catalog.load().await;

        let before = catalog.birds().len();
        let created = catalog.create(new_bird("Chucao")).await.unwrap();

        assert_eq!(catalog.birds().len(), before + 1);
        assert_eq!(created.id, 7);
        assert_eq!(catalog.birds().last().unwrap().id, 7);

        let requests = catalog.gateway.transport.requests();
        let create_req = &requests[1];
        assert_eq!(create_req.method, Method::Post);
        assert!(create_req.url.ends_with("/api/birds"));
        assert_eq!(create_req.bearer.as_deref(), Some("tok-admin"));
        assert!(create_req.body.as_ref().unwrap().contains("scientificname"));
    }

    #[tokio::test]
    async fn create_403_yields_fixed_permission_message() {
        let transport = MockTransport::new();
        transport.push_status(403, r#"{"detail": "server explanation to ignore"}"#);
        let mut catalog = admin_catalog(transport);

        let err = catalog.create(new_bird("Chucao")).await.unwrap_err();
        assert_eq!(err.to_string(), PERMISSION_DENIED_MESSAGE);
        assert!(catalog.birds().is_empty());
    }

    #[tokio::test]
    async fn create_other_failure_is_request_failed() {
        let transport = MockTransport::new();
        transport.push_status(422, "campo inválido");
        let mut catalog = admin_catalog(transport);

        let err = catalog.create(new_bird("Chucao")).await.unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 422, .. }));
        assert!(catalog.birds().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_only_matching_element() {
        let transport = MockTransport::new();
        transport.push_status(
            200,
            &format!("[{},{}]", record_json(5, "Chucao"), record_json(9, "Loica")),
        );
        transport.push_status(200, &record_json(5, "Chucao austral"));
        let mut catalog = admin_catalog(transport);
        catalog.load().await;

        let updated = catalog.update(5, new_bird("Chucao austral")).await.unwrap();
        assert_eq!(updated.name, "Chucao austral");
        assert_eq!(catalog.birds()[0].name, "Chucao austral");
        assert_eq!(catalog.birds()[1].name, "Loica");

        let requests = catalog.gateway.transport.requests();
        assert_eq!(requests[1].method, Method::Put);
        assert!(requests[1].url.ends_with("/api/birds/5"));
    }

    #[tokio::test]
    async fn update_unknown_id_is_local_noop() {
        let transport = MockTransport::new();
        transport.push_status(200, &format!("[{}]", record_json(5, "Chucao")));
        transport.push_status(200, &record_json(77, "Fantasma"));
        let mut catalog = admin_catalog(transport);
        catalog.load().await;

        catalog.update(77, new_bird("Fantasma")).await.unwrap();
        assert_eq!(catalog.birds().len(), 1);
        assert_eq!(catalog.birds()[0].name, "Chucao");
    }

    #[tokio::test]
    async fn delete_removes_matching_element() {
        let transport = MockTransport::new();
        transport.push_status(
            200,
            &format!("[{},{}]", record_json(5, "Chucao"), record_json(9, "Loica")),
        );
        transport.push_status(204, "");
        let mut catalog = admin_catalog(transport);
        catalog.load().await;

        catalog.delete(5).await.unwrap();
        assert_eq!(catalog.birds().len(), 1);
        assert_eq!(catalog.birds()[0].id, 9);

        let requests = catalog.gateway.transport.requests();
        assert_eq!(requests[1].method, Method::Delete);
        assert!(requests[1].url.ends_with("/api/birds/5"));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_local_noop() {
        let transport = MockTransport::new();
        transport.push_status(200, &format!("[{}]", record_json(9, "Loica")));
        transport.push_status(200, "");
        let mut catalog = admin_catalog(transport);
        catalog.load().await;

        catalog.delete(123).await.unwrap();
        assert_eq!(catalog.birds().len(), 1);
    }

    #[tokio::test]
    async fn delete_permission_denied_keeps_local_state() {
        let transport = MockTransport::new();
        transport.push_status(200, &format!("[{}]", record_json(9, "Loica")));
        transport.push_status(401, "");
        let mut catalog = admin_catalog(transport);
        catalog.load().await;

        let err = catalog.delete(9).await.unwrap_err();
        assert!(matches!(err, ApiError::PermissionDenied));
        assert_eq!(catalog.birds().len(), 1);
    }
}
