use sqlx::PgPool;
use storage::dto::common::{PaginationMeta, PaginationParams};
use storage::dto::institute::{
    CreateInstituteRequest, InstituteListResponse, InstituteResponse, InstituteSummaryResponse,
    UpdateInstituteRequest,
};
use storage::repository::institute::InstituteRepository;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// List one page of institutes
pub async fn list_institutes(
    pool: &PgPool,
    params: &PaginationParams,
) -> WebResult<InstituteListResponse> {
    let repo = InstituteRepository::new(pool);

    let total = repo.count().await?;
    let institutes = repo.list(i64::from(params.limit), params.offset()).await?;

    Ok(InstituteListResponse {
        institutes: institutes.into_iter().map(InstituteResponse::from).collect(),
        pagination: PaginationMeta::new(params.page, params.limit, total),
    })
}

pub async fn get_institute(pool: &PgPool, id: Uuid) -> WebResult<InstituteResponse> {
    let repo = InstituteRepository::new(pool);

    let institute = repo
        .find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Institute not found"))?;

    Ok(institute.into())
}

/// Create an institute; names are unique across the system
pub async fn create_institute(
    pool: &PgPool,
    req: &CreateInstituteRequest,
) -> WebResult<InstituteResponse> {
    let repo = InstituteRepository::new(pool);

    if repo.find_by_name(&req.name).await?.is_some() {
        return Err(WebError::BadRequest("Institute already exists".to_string()));
    }

    let institute = repo.create(req).await?;
    Ok(institute.into())
}

pub async fn update_institute(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateInstituteRequest,
) -> WebResult<InstituteResponse> {
    let repo = InstituteRepository::new(pool);

    let existing = repo
        .find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Institute not found"))?;

    let updated = repo.update(id, &existing, req).await?;
    Ok(updated.into())
}

pub async fn delete_institute(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = InstituteRepository::new(pool);

    repo.delete(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Institute not found"))
}

pub async fn get_institute_summary(pool: &PgPool, id: Uuid) -> WebResult<InstituteSummaryResponse> {
    let repo = InstituteRepository::new(pool);

    // 404 before counting against an id that never existed
    repo.find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Institute not found"))?;

    let (events_count, participants_count) = repo.summary(id).await?;

    Ok(InstituteSummaryResponse {
        institute_id: id,
        events_count,
        participants_count,
    })
}
