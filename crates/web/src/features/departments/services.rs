use sqlx::PgPool;
use storage::dto::department::{
    CreateDepartmentRequest, DepartmentResponse, UpdateDepartmentRequest,
};
use storage::repository::department::DepartmentRepository;
use storage::repository::institute::InstituteRepository;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

pub async fn list_departments(pool: &PgPool) -> WebResult<Vec<DepartmentResponse>> {
    let repo = DepartmentRepository::new(pool);

    let departments = repo.list().await?;
    Ok(departments.into_iter().map(DepartmentResponse::from).collect())
}

pub async fn list_departments_by_institute(
    pool: &PgPool,
    institute_id: Uuid,
) -> WebResult<Vec<DepartmentResponse>> {
    let repo = DepartmentRepository::new(pool);

    let departments = repo.list_by_institute(institute_id).await?;
    Ok(departments.into_iter().map(DepartmentResponse::from).collect())
}

/// Create a department; (name, institute) pairs are unique
pub async fn create_department(
    pool: &PgPool,
    req: &CreateDepartmentRequest,
) -> WebResult<DepartmentResponse> {
    let institutes = InstituteRepository::new(pool);
    institutes
        .find_by_id(req.institute_id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Institute not found"))?;

    let repo = DepartmentRepository::new(pool);

    if repo.name_taken(&req.name, req.institute_id, None).await? {
        return Err(WebError::BadRequest(
            "A department with this name already exists in this institute".to_string(),
        ));
    }

    let department = repo.create(req).await?;
    Ok(department.into())
}

pub async fn update_department(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateDepartmentRequest,
) -> WebResult<DepartmentResponse> {
    let repo = DepartmentRepository::new(pool);

    let existing = repo
        .find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Department not found"))?;

    // Re-check the pair uniqueness whenever either half may change
    if req.name.is_some() || req.institute_id.is_some() {
        let target_name = req.name.as_ref().unwrap_or(&existing.name);
        let target_institute = req.institute_id.unwrap_or(existing.institute_id);

        if repo.name_taken(target_name, target_institute, Some(id)).await? {
            return Err(WebError::BadRequest(
                "Another department with this name already exists in this institute".to_string(),
            ));
        }
    }

    let updated = repo.update(id, &existing, req).await?;
    Ok(updated.into())
}

pub async fn delete_department(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = DepartmentRepository::new(pool);

    repo.delete(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Department not found"))
}
