//! Directory operations: provider admin CRUD plus receiver and claim reads.

use std::sync::Arc;

use tracing::info;

use foodshare_core::error::AppError;
use foodshare_core::result::AppResult;
use foodshare_database::repositories::claim::ClaimRepository;
use foodshare_database::repositories::provider::ProviderRepository;
use foodshare_database::repositories::receiver::ReceiverRepository;
use foodshare_entity::claim::{Claim, ClaimStatus};
use foodshare_entity::provider::{CreateProvider, Provider, ProviderContact, UpdateProvider};
use foodshare_entity::receiver::Receiver;

/// Serves the provider/receiver/claim reference views and provider
/// administration.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    /// Provider repository.
    provider_repo: Arc<ProviderRepository>,
    /// Receiver repository.
    receiver_repo: Arc<ReceiverRepository>,
    /// Claim repository.
    claim_repo: Arc<ClaimRepository>,
}

impl DirectoryService {
    /// Creates a new directory service.
    pub fn new(
        provider_repo: Arc<ProviderRepository>,
        receiver_repo: Arc<ReceiverRepository>,
        claim_repo: Arc<ClaimRepository>,
    ) -> Self {
        Self {
            provider_repo,
            receiver_repo,
            claim_repo,
        }
    }

    /// Lists all providers.
    pub async fn list_providers(&self) -> AppResult<Vec<Provider>> {
        self.provider_repo.find_all().await
    }

    /// Gets a provider by ID.
    pub async fn get_provider(&self, id: i64) -> AppResult<Provider> {
        self.provider_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Provider {id} not found")))
    }

    /// Creates a new provider.
    pub async fn create_provider(&self, data: CreateProvider) -> AppResult<Provider> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Provider name cannot be empty"));
        }
        if data.city.trim().is_empty() {
            return Err(AppError::validation("Provider city cannot be empty"));
        }

        let provider = self.provider_repo.create(&data).await?;
        info!(provider_id = provider.id, "Provider created");
        Ok(provider)
    }

    /// Applies a partial update to a provider.
    pub async fn update_provider(&self, id: i64, data: UpdateProvider) -> AppResult<Provider> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Provider name cannot be empty"));
            }
        }
        if let Some(city) = &data.city {
            if city.trim().is_empty() {
                return Err(AppError::validation("Provider city cannot be empty"));
            }
        }

        let provider = self.provider_repo.update(id, &data).await?;
        info!(provider_id = id, "Provider updated");
        Ok(provider)
    }

    /// Provider contact details for one city.
    pub async fn provider_contacts(&self, city: &str) -> AppResult<Vec<ProviderContact>> {
        self.provider_repo.contacts_by_city(city).await
    }

    /// Lists all receivers.
    pub async fn list_receivers(&self) -> AppResult<Vec<Receiver>> {
        self.receiver_repo.find_all().await
    }

    /// Gets a receiver by ID.
    pub async fn get_receiver(&self, id: i64) -> AppResult<Receiver> {
        self.receiver_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Receiver {id} not found")))
    }

    /// Lists claims, optionally restricted to a status.
    pub async fn list_claims(&self, status: Option<ClaimStatus>) -> AppResult<Vec<Claim>> {
        self.claim_repo.find_all(status).await
    }

    /// Gets a claim by ID.
    pub async fn get_claim(&self, id: i64) -> AppResult<Claim> {
        self.claim_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Claim {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodshare_core::error::ErrorKind;
    use foodshare_database::connection::DatabasePool;
    use foodshare_database::migration::run_migrations;

    async fn service() -> DirectoryService {
        let pool = DatabasePool::connect_in_memory().await.unwrap().into_pool();
        run_migrations(&pool).await.unwrap();
        sqlx::query(
            "INSERT INTO receivers (id, name, kind, city, contact) \
             VALUES (1, 'Hope Shelter', 'Shelter', 'Chennai', 'h@example.com')",
        )
        .execute(&pool)
        .await
        .unwrap();
        DirectoryService::new(
            Arc::new(ProviderRepository::new(pool.clone())),
            Arc::new(ReceiverRepository::new(pool.clone())),
            Arc::new(ClaimRepository::new(pool)),
        )
    }

    #[tokio::test]
    async fn test_provider_crud_and_contacts() {
        let svc = service().await;
        let created = svc
            .create_provider(CreateProvider {
                name: "Green Bistro".to_string(),
                kind: "Restaurant".to_string(),
                address: "12 Oak St".to_string(),
                city: "Chennai".to_string(),
                contact: "g@example.com".to_string(),
            })
            .await
            .unwrap();

        let updated = svc
            .update_provider(
                created.id,
                UpdateProvider {
                    contact: Some("new@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.contact, "new@example.com");
        assert_eq!(updated.name, "Green Bistro");

        let contacts = svc.provider_contacts("Chennai").await.unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].contact, "new@example.com");

        assert!(svc.provider_contacts("Nowhere").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_provider_validation() {
        let svc = service().await;
        let err = svc
            .create_provider(CreateProvider {
                name: " ".to_string(),
                kind: "Restaurant".to_string(),
                address: "x".to_string(),
                city: "Chennai".to_string(),
                contact: "c".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_receiver_and_claim_reads() {
        let svc = service().await;
        assert_eq!(svc.list_receivers().await.unwrap().len(), 1);
        assert_eq!(svc.get_receiver(1).await.unwrap().name, "Hope Shelter");
        assert_eq!(
            svc.get_receiver(9).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
        assert!(svc.list_claims(None).await.unwrap().is_empty());
        assert!(
            svc.list_claims(Some(ClaimStatus::Pending))
                .await
                .unwrap()
                .is_empty()
        );
    }
}
