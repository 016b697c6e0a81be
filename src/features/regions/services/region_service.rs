use std::sync::Arc;

use crate::features::regions::models::{District, Province, Regency, Village};
use crate::modules::resource::{ResourceService, Storage};

pub type ProvinceService = ResourceService<Province>;
pub type RegencyService = ResourceService<Regency>;
pub type DistrictService = ResourceService<District>;
pub type VillageService = ResourceService<Village>;

/// Services for the four administrative levels
#[derive(Clone)]
pub struct RegionServices {
    pub provinces: Arc<ProvinceService>,
    pub regencies: Arc<RegencyService>,
    pub districts: Arc<DistrictService>,
    pub villages: Arc<VillageService>,
}

impl RegionServices {
    pub fn new(storage: &Storage) -> Self {
        Self {
            provinces: Arc::new(ProvinceService::new(storage.store())),
            regencies: Arc::new(RegencyService::new(storage.store())),
            districts: Arc::new(DistrictService::new(storage.store())),
            villages: Arc::new(VillageService::new(storage.store())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::regions::dtos::{
        CreateDistrictDto, CreateProvinceDto, CreateRegencyDto, CreateVillageDto,
        UpdateProvinceDto,
    };
    use crate::shared::pagination::{Filter, PageOptions, SortDirection, SortSpec};
    use uuid::Uuid;

    fn services() -> RegionServices {
        RegionServices::new(&Storage::Memory)
    }

    fn province(kd: &str, name: Option<&str>) -> CreateProvinceDto {
        CreateProvinceDto {
            kd_province: kd.to_string(),
            name_province: name.map(str::to_string),
        }
    }

    fn options(limit: i64, page: i64) -> PageOptions {
        PageOptions {
            limit,
            page,
            ..PageOptions::default()
        }
    }

    #[tokio::test]
    async fn test_fifteen_provinces_paginate_into_two_pages() {
        let services = services();
        for i in 0..15 {
            services
                .provinces
                .create(province(&format!("{:02}", i + 11), None))
                .await
                .unwrap();
        }

        let first = services
            .provinces
            .list(&Filter::new(), &options(10, 1))
            .await
            .unwrap();
        assert_eq!(first.results.len(), 10);
        assert_eq!(first.total_results, 15);
        assert_eq!(first.total_pages, 2);

        let second = services
            .provinces
            .list(&Filter::new(), &options(10, 2))
            .await
            .unwrap();
        assert_eq!(second.results.len(), 5);
        assert_eq!(second.page, 2);

        let beyond = services
            .provinces
            .list(&Filter::new(), &options(10, 3))
            .await
            .unwrap();
        assert!(beyond.results.is_empty());
        assert_eq!(beyond.total_results, 15);

        // Default order is creation order, so pages never overlap
        let mut seen: Vec<Uuid> = first.results.iter().map(|p| p.id).collect();
        seen.extend(second.results.iter().map(|p| p.id));
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 15);
    }

    #[tokio::test]
    async fn test_empty_collection_has_zero_pages() {
        let page = services()
            .villages
            .list(&Filter::new(), &PageOptions::default())
            .await
            .unwrap();

        assert!(page.results.is_empty());
        assert_eq!(page.total_results, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
    }

    #[tokio::test]
    async fn test_sort_by_name_puts_missing_names_last() {
        let services = services();
        services
            .provinces
            .create(province("33", Some("Jawa Tengah")))
            .await
            .unwrap();
        services.provinces.create(province("99", None)).await.unwrap();
        services
            .provinces
            .create(province("11", Some("Aceh")))
            .await
            .unwrap();

        let options = PageOptions {
            sort: vec![SortSpec {
                field: "name_province",
                direction: SortDirection::Asc,
            }],
            ..PageOptions::default()
        };
        let page = services
            .provinces
            .list(&Filter::new(), &options)
            .await
            .unwrap();

        let codes: Vec<&str> = page.results.iter().map(|p| p.kd_province.as_str()).collect();
        assert_eq!(codes, vec!["11", "33", "99"]);
    }

    #[tokio::test]
    async fn test_filter_regencies_by_parent() {
        let services = services();
        for (id_province, kd_regency) in [("p-1", "32.01"), ("p-1", "32.02"), ("p-2", "33.01")] {
            services
                .regencies
                .create(CreateRegencyDto {
                    id_province: id_province.to_string(),
                    kd_province: kd_regency[..2].to_string(),
                    kd_regency: kd_regency.to_string(),
                    name_regency: None,
                })
                .await
                .unwrap();
        }

        let page = services
            .regencies
            .list(&Filter::new().eq("id_province", "p-1"), &PageOptions::default())
            .await
            .unwrap();
        assert_eq!(page.total_results, 2);
        assert!(page.results.iter().all(|r| r.id_province == "p-1"));
    }

    #[tokio::test]
    async fn test_deleted_regency_is_gone() {
        let services = services();
        let regency = services
            .regencies
            .create(CreateRegencyDto {
                id_province: "p-1".to_string(),
                kd_province: "32".to_string(),
                kd_regency: "32.73".to_string(),
                name_regency: Some("Kota Bandung".to_string()),
            })
            .await
            .unwrap();

        let deleted = services.regencies.delete_by_id(regency.id).await.unwrap();
        assert_eq!(deleted, regency);
        assert_eq!(services.regencies.get_by_id(regency.id).await.unwrap(), None);

        let again = services.regencies.delete_by_id(regency.id).await;
        assert!(matches!(again, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_district_delete_targets_its_own_id() {
        let services = services();
        let keep = services
            .districts
            .create(CreateDistrictDto {
                id_regency: "r-1".to_string(),
                kd_regency: "32.73".to_string(),
                kd_district: "32.73.01".to_string(),
                name_district: Some("Sukasari".to_string()),
            })
            .await
            .unwrap();
        let remove = services
            .districts
            .create(CreateDistrictDto {
                id_regency: "r-1".to_string(),
                kd_regency: "32.73".to_string(),
                kd_district: "32.73.02".to_string(),
                name_district: Some("Coblong".to_string()),
            })
            .await
            .unwrap();

        services.districts.delete_by_id(remove.id).await.unwrap();

        assert_eq!(services.districts.get_by_id(keep.id).await.unwrap(), Some(keep));
        assert_eq!(services.districts.get_by_id(remove.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_dangling_parent_reference_is_accepted() {
        let village = services()
            .villages
            .create(CreateVillageDto {
                id_districts: Uuid::now_v7().to_string(),
                kd_districts: "32.73.01".to_string(),
                kd_village: "32.73.01.1001".to_string(),
                name_village: Some(" Gegerkalong ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(village.name_village.as_deref(), Some("Gegerkalong"));
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let services = services();
        let created = services
            .provinces
            .create(province("32", Some("Jabar")))
            .await
            .unwrap();

        let updated = services
            .provinces
            .update_by_id(
                created.id,
                UpdateProvinceDto {
                    name_province: Some("Jawa Barat".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.kd_province, "32");
        assert_eq!(updated.name_province.as_deref(), Some("Jawa Barat"));
        assert_eq!(
            services.provinces.get_by_id(created.id).await.unwrap(),
            Some(updated)
        );
    }

    #[tokio::test]
    async fn test_province_codes_are_not_unique() {
        let services = services();
        services.provinces.create(province("32", None)).await.unwrap();
        services.provinces.create(province("32", None)).await.unwrap();

        let page = services
            .provinces
            .list(&Filter::new().eq("kd_province", "32"), &PageOptions::default())
            .await
            .unwrap();
        assert_eq!(page.total_results, 2);
    }
}
