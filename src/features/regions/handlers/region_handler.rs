use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::{
    RegionResponseDto, RegionSearchQuery, SearchCacheResponseDto, StatsResponseDto,
};
use crate::features::regions::models::Region;
use crate::features::regions::services::RegionService;
use crate::shared::constants::DEFAULT_SEARCH_LIMIT;
use crate::shared::types::ApiResponse;

/// Shared state for region handlers
#[derive(Clone)]
pub struct RegionState {
    pub service: Arc<RegionService>,
    /// Cap applied to the `limit` query parameter
    pub max_limit: usize,
}

impl RegionState {
    pub fn new(service: Arc<RegionService>, max_limit: usize) -> Self {
        Self { service, max_limit }
    }

    /// Validated `(q, limit)` from the query string
    fn search_params<'a>(&self, query: &'a RegionSearchQuery) -> Result<(&'a str, usize)> {
        let q = query
            .q
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest("Query parameter 'q' is required".to_string()))?;

        let limit = query
            .limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .min(self.max_limit);

        Ok((q, limit))
    }
}

fn to_dtos<'a>(regions: impl IntoIterator<Item = &'a Region>) -> Vec<RegionResponseDto> {
    regions.into_iter().map(Into::into).collect()
}

// ==================== Statistics ====================

/// Region counts per level
#[utoipa::path(
    get,
    path = "/api/regions/stats",
    responses(
        (status = 200, description = "Region counts per level", body = ApiResponse<StatsResponseDto>)
    ),
    tag = "regions"
)]
pub async fn get_stats(
    State(state): State<RegionState>,
) -> Result<Json<ApiResponse<StatsResponseDto>>> {
    let stats = state.service.stats();
    Ok(Json(ApiResponse::success(Some(stats.into()), None, None)))
}

// ==================== Hierarchy Handlers ====================

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<RegionResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(state): State<RegionState>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let provinces = state.service.list_provinces();
    Ok(Json(ApiResponse::list(to_dtos(&provinces))))
}

/// List all regions at a level
#[utoipa::path(
    get,
    path = "/api/regions/levels/{level}",
    params(
        ("level" = usize, Path, description = "1 = provinsi, 2 = kabupaten/kota, 3 = kecamatan, 4 = kelurahan/desa")
    ),
    responses(
        (status = 200, description = "Regions at the level (empty when out of range)", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 400, description = "Level is not a number")
    ),
    tag = "regions"
)]
pub async fn list_by_level(
    State(state): State<RegionState>,
    Path(level): Path<usize>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let regions = state.service.get_by_level(level);
    Ok(Json(ApiResponse::list(to_dtos(&regions))))
}

/// Get a region by code
#[utoipa::path(
    get,
    path = "/api/regions/{code}",
    params(
        ("code" = String, Path, description = "Region code (e.g. 11, 31.71, 11.01.01.2001)")
    ),
    responses(
        (status = 200, description = "Region details", body = ApiResponse<RegionResponseDto>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(state): State<RegionState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<RegionResponseDto>>> {
    let region = state
        .service
        .find_by_code(&code)
        .ok_or_else(|| AppError::NotFound(format!("Region with code '{}' not found", code)))?;

    Ok(Json(ApiResponse::success(Some(region.into()), None, None)))
}

/// List direct children of a region
#[utoipa::path(
    get,
    path = "/api/regions/{code}/children",
    params(
        ("code" = String, Path, description = "Parent region code")
    ),
    responses(
        (status = 200, description = "Direct children (empty for unknown codes)", body = ApiResponse<Vec<RegionResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_children(
    State(state): State<RegionState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let children = state.service.get_children(&code);
    Ok(Json(ApiResponse::list(to_dtos(&children))))
}

// ==================== Search Handlers ====================

/// Search regions by name (cached)
#[utoipa::path(
    get,
    path = "/api/regions/search",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "Regions whose name contains the query", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 400, description = "Search parameter required")
    ),
    tag = "regions"
)]
pub async fn search_regions(
    State(state): State<RegionState>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let (q, limit) = state.search_params(&query)?;
    let results = state.service.search(q, limit);
    Ok(Json(ApiResponse::list(to_dtos(results.iter()))))
}

/// Autocomplete regions by name (uncached)
#[utoipa::path(
    get,
    path = "/api/regions/autocomplete",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "Regions whose name contains the query", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 400, description = "Search parameter required")
    ),
    tag = "regions"
)]
pub async fn autocomplete_regions(
    State(state): State<RegionState>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let (q, limit) = state.search_params(&query)?;
    let results = state.service.autocomplete(q, limit);
    Ok(Json(ApiResponse::list(to_dtos(&results))))
}

/// Search cache status
#[utoipa::path(
    get,
    path = "/api/regions/search/cache",
    responses(
        (status = 200, description = "Search cache status", body = ApiResponse<SearchCacheResponseDto>)
    ),
    tag = "regions"
)]
pub async fn get_search_cache(
    State(state): State<RegionState>,
) -> Result<Json<ApiResponse<SearchCacheResponseDto>>> {
    Ok(Json(ApiResponse::success(
        Some(cache_status(&state.service)),
        None,
        None,
    )))
}

/// Clear the search cache
#[utoipa::path(
    delete,
    path = "/api/regions/search/cache",
    responses(
        (status = 200, description = "Search cache cleared", body = ApiResponse<SearchCacheResponseDto>)
    ),
    tag = "regions"
)]
pub async fn clear_search_cache(
    State(state): State<RegionState>,
) -> Result<Json<ApiResponse<SearchCacheResponseDto>>> {
    state.service.clear_cache();
    tracing::info!("Search cache cleared");
    Ok(Json(ApiResponse::success(
        Some(cache_status(&state.service)),
        Some("Search cache cleared".to_string()),
        None,
    )))
}

fn cache_status(service: &RegionService) -> SearchCacheResponseDto {
    let cache = service.cache();
    SearchCacheResponseDto {
        entries: cache.len(),
        hits: cache.hits(),
        misses: cache.misses(),
    }
}
