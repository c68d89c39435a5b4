use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::department::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::error::{Result, StorageError};
use crate::models::Department;

/// Repository for Department database operations
pub struct DepartmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Department>> {
        let departments = sqlx::query_as::<_, Department>(
            r#"
            SELECT department_id, name, hod, contact_email, institute_id, created_at, updated_at
            FROM departments
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(departments)
    }

    pub async fn list_by_institute(&self, institute_id: Uuid) -> Result<Vec<Department>> {
        let departments = sqlx::query_as::<_, Department>(
            r#"
            SELECT department_id, name, hod, contact_email, institute_id, created_at, updated_at
            FROM departments
            WHERE institute_id = $1
            ORDER BY name
            "#,
        )
        .bind(institute_id)
        .fetch_all(self.pool)
        .await?;

        Ok(departments)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Department> {
        let department = sqlx::query_as::<_, Department>(
            r#"
            SELECT department_id, name, hod, contact_email, institute_id, created_at, updated_at
            FROM departments
            WHERE department_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(department)
    }

    /// Does another department with this name exist in the institute?
    pub async fn name_taken(
        &self,
        name: &str,
        institute_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<bool> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM departments
                WHERE name = $1
                  AND institute_id = $2
                  AND ($3::uuid IS NULL OR department_id <> $3)
            )
            "#,
        )
        .bind(name)
        .bind(institute_id)
        .bind(exclude)
        .fetch_one(self.pool)
        .await?;

        Ok(taken)
    }

    pub async fn create(&self, req: &CreateDepartmentRequest) -> Result<Department> {
        let department = sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO departments (name, hod, contact_email, institute_id)
            VALUES ($1, $2, $3, $4)
            RETURNING department_id, name, hod, contact_email, institute_id, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.hod)
        .bind(&req.contact_email)
        .bind(req.institute_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique("A department with this name already exists in this institute")
                .on_foreign_key("Institute not found")
        })?;

        Ok(department)
    }

    /// Update a department; absent patch fields keep their stored values
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Department,
        req: &UpdateDepartmentRequest,
    ) -> Result<Department> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let hod = req.hod.as_ref().unwrap_or(&existing.hod);
        let contact_email = req.contact_email.as_ref().unwrap_or(&existing.contact_email);
        let institute_id = req.institute_id.unwrap_or(existing.institute_id);

        let department = sqlx::query_as::<_, Department>(
            r#"
            UPDATE departments
            SET name = $2, hod = $3, contact_email = $4, institute_id = $5, updated_at = now()
            WHERE department_id = $1
            RETURNING department_id, name, hod, contact_email, institute_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(hod)
        .bind(contact_email)
        .bind(institute_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique("Another department with this name already exists in this institute")
                .on_foreign_key("Institute not found")
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(department)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM departments WHERE department_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e).on_foreign_key("Department has linked participants")
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
