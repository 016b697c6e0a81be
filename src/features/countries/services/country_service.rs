use crate::core::error::Result;
use crate::features::countries::models::Country;
use crate::modules::resource::ResourceService;
use crate::shared::pagination::Filter;

/// Service for managing countries
pub type CountryService = ResourceService<Country>;

impl ResourceService<Country> {
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Country>> {
        let filter = Filter::new().eq("code", code.trim());
        self.find_one(&filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::countries::dtos::{CreateCountryDto, UpdateCountryDto};
    use crate::modules::resource::MemoryStore;
    use crate::shared::pagination::PageOptions;
    use std::sync::Arc;
    use uuid::Uuid;

    fn service() -> CountryService {
        CountryService::new(Arc::new(MemoryStore::<Country>::new()))
    }

    fn country(name: &str, code: Option<&str>) -> CreateCountryDto {
        CreateCountryDto {
            name_country: name.to_string(),
            code: code.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let service = service();
        let created = service
            .create(country("  Indonesia ", Some("ID")))
            .await
            .unwrap();

        assert_eq!(created.name_country, "Indonesia");
        assert_eq!(created.created_at, created.updated_at);

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_duplicate_code_rejected_without_write() {
        let service = service();
        service
            .create(country("Indonesia", Some("ID")))
            .await
            .unwrap();

        let result = service.create(country("Other", Some("ID"))).await;
        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "code already taken"),
            other => panic!("expected validation error, got {:?}", other),
        }

        let page = service
            .list(&Filter::new(), &PageOptions::default())
            .await
            .unwrap();
        assert_eq!(page.total_results, 1);
    }

    #[tokio::test]
    async fn test_countries_without_code_do_not_collide() {
        let service = service();
        service.create(country("Atlantis", None)).await.unwrap();
        service.create(country("Lemuria", None)).await.unwrap();

        let page = service
            .list(&Filter::new(), &PageOptions::default())
            .await
            .unwrap();
        assert_eq!(page.total_results, 2);
    }

    #[tokio::test]
    async fn test_update_may_keep_own_code() {
        let service = service();
        let created = service
            .create(country("Indonesia", Some("ID")))
            .await
            .unwrap();

        let updated = service
            .update_by_id(
                created.id,
                UpdateCountryDto {
                    name_country: Some("Republic of Indonesia".to_string()),
                    code: Some("ID".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name_country, "Republic of Indonesia");
        assert_eq!(updated.code.as_deref(), Some("ID"));
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_to_taken_code_fails() {
        let service = service();
        service
            .create(country("Indonesia", Some("ID")))
            .await
            .unwrap();
        let malaysia = service
            .create(country("Malaysia", Some("MY")))
            .await
            .unwrap();

        let result = service
            .update_by_id(
                malaysia.id,
                UpdateCountryDto {
                    code: Some("ID".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let unchanged = service.get_by_id(malaysia.id).await.unwrap().unwrap();
        assert_eq!(unchanged.code.as_deref(), Some("MY"));
    }

    #[tokio::test]
    async fn test_code_taken_check_excludes_own_record() {
        let service = service();
        let created = service
            .create(country("Indonesia", Some("ID")))
            .await
            .unwrap();

        assert!(service.is_value_taken("code", "ID", None).await.unwrap());
        assert!(!service
            .is_value_taken("code", "ID", Some(created.id))
            .await
            .unwrap());
        assert!(!service.is_value_taken("code", "MY", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_by_code() {
        let service = service();
        let created = service
            .create(country("Indonesia", Some("ID")))
            .await
            .unwrap();

        assert_eq!(service.get_by_code("ID").await.unwrap(), Some(created.clone()));
        assert_eq!(service.get_by_code(" ID ").await.unwrap(), Some(created));
        assert_eq!(service.get_by_code("XX").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_country() {
        let service = service();
        let missing = Uuid::now_v7();

        let update = service
            .update_by_id(
                missing,
                UpdateCountryDto {
                    name_country: Some("Nowhere".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(update, Err(AppError::NotFound(_))));

        let delete = service.delete_by_id(missing).await;
        assert!(matches!(delete, Err(AppError::NotFound(_))));
    }
}
