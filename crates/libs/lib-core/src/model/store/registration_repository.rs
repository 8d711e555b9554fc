//! # Registration Repository
//!
//! Database access for membership registrations. Every submission is one
//! `INSERT`; rows are never updated.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lib_core::model::store::{create_pool, RegistrationForCreate, RegistrationRepository};
//! use shared::RegistrationRequest;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = create_pool("sqlite:data/registrations.db").await?;
//! let row = RegistrationForCreate::from_request(&RegistrationRequest::default(), chrono::Utc::now());
//! let saved = RegistrationRepository::create(&pool, &row).await?;
//! println!("Stored registration #{}", saved.id);
//! # Ok(())
//! # }
//! ```

use sqlx::query_as;

use super::models::{Registration, RegistrationForCreate};
use super::DbPool;

pub struct RegistrationRepository;

impl RegistrationRepository {
    /// Insert a registration and return the stored row.
    pub async fn create(
        pool: &DbPool,
        data: &RegistrationForCreate,
    ) -> Result<Registration, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO registrations (
                full_name, email, phone, year, branch, programming_experience,
                interests, github_profile, attended_before, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.year)
        .bind(&data.branch)
        .bind(&data.programming_experience)
        .bind(&data.interests)
        .bind(&data.github_profile)
        .bind(&data.attended_before)
        .bind(&data.created_at)
        .execute(pool)
        .await?;

        Self::find_by_id(pool, result.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Registration>, sqlx::Error> {
        query_as::<_, Registration>("SELECT * FROM registrations WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All registrations in submission order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Registration>, sqlx::Error> {
        query_as::<_, Registration>("SELECT * FROM registrations ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = query_as("SELECT COUNT(*) FROM registrations")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_utils::now_utc;
    use shared::RegistrationRequest;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> DbPool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        sqlx::query(include_str!(
            "../../../../../../backend/migrations/20250801000000_create_registrations.sql"
        ))
        .execute(&pool)
        .await
        .expect("Failed to create registrations table");

        pool
    }

    fn registration(name: &str, attended_before: bool) -> RegistrationForCreate {
        let req = RegistrationRequest {
            full_name: name.to_string(),
            email: format!("{}@x.co", name.to_lowercase()),
            phone: "555-123-4567".to_string(),
            year: "2nd".to_string(),
            branch: "CS".to_string(),
            programming_experience: "beginner".to_string(),
            interests: "AI/ML, Web Dev".to_string(),
            attended_before,
            ..Default::default()
        };
        RegistrationForCreate::from_request(&req, now_utc())
    }

    #[tokio::test]
    async fn test_create_registration() {
        let pool = setup_test_db().await;

        let saved = RegistrationRepository::create(&pool, &registration("Ann", true))
            .await
            .unwrap();

        assert_eq!(saved.full_name, "Ann");
        assert_eq!(saved.email, "ann@x.co");
        assert_eq!(saved.interests, "AI/ML, Web Dev");
        assert_eq!(saved.attended_before, "Yes");
        assert!(saved.created_at_utc().is_some());
    }

    #[tokio::test]
    async fn test_list_in_submission_order() {
        let pool = setup_test_db().await;

        for name in ["Ann", "Bo", "Cy"] {
            RegistrationRepository::create(&pool, &registration(name, false))
                .await
                .unwrap();
        }

        let rows = RegistrationRepository::list(&pool).await.unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bo", "Cy"]);
        assert!(rows.iter().all(|r| r.attended_before == "No"));
        assert_eq!(RegistrationRepository::count(&pool).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_emails_are_kept() {
        let pool = setup_test_db().await;

        RegistrationRepository::create(&pool, &registration("Ann", false))
            .await
            .unwrap();
        RegistrationRepository::create(&pool, &registration("Ann", true))
            .await
            .unwrap();

        assert_eq!(RegistrationRepository::count(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_missing_table_is_an_error() {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let result = RegistrationRepository::create(&pool, &registration("Ann", false)).await;
        assert!(result.is_err());
    }
}
