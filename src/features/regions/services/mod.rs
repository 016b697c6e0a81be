mod region_service;

pub use region_service::{
    DistrictService, ProvinceService, RegencyService, RegionServices, VillageService,
};
