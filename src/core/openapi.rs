use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::get_stats,
        regions_handlers::list_provinces,
        regions_handlers::list_by_level,
        regions_handlers::get_region,
        regions_handlers::list_children,
        // Search
        regions_handlers::search_regions,
        regions_handlers::autocomplete_regions,
        regions_handlers::get_search_cache,
        regions_handlers::clear_search_cache,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Regions
            regions_dtos::RegionResponseDto,
            regions_dtos::StatsResponseDto,
            regions_dtos::SearchCacheResponseDto,
            ApiResponse<regions_dtos::RegionResponseDto>,
            ApiResponse<Vec<regions_dtos::RegionResponseDto>>,
            ApiResponse<regions_dtos::StatsResponseDto>,
            ApiResponse<regions_dtos::SearchCacheResponseDto>,
        )
    ),
    tags(
        (name = "regions", description = "Indonesian administrative regions (provinsi, kabupaten/kota, kecamatan, kelurahan/desa)"),
    ),
    info(
        title = "Nusantara Regions API",
        version = "0.1.0",
        description = "Read-only lookup and search over Indonesian administrative regions",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info at startup
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
