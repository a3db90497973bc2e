//! Employee Repository

use chrono::{DateTime, Utc};
use shared::Employee;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const COLUMNS: &str = "id, name, ref_id, gender, purpose, expiry, signature, valid, created_at";

/// Persisted employee row
///
/// `is_lifetime` is not a column: lifetime status is derived from a NULL
/// expiry when the row is converted to the wire model, so the two can never
/// contradict each other.
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    ref_id: String,
    gender: String,
    purpose: String,
    expiry: Option<DateTime<Utc>>,
    signature: String,
    valid: bool,
    created_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            name: row.name,
            ref_id: row.ref_id,
            gender: row.gender,
            purpose: row.purpose,
            is_lifetime: row.expiry.is_none(),
            expiry: row.expiry,
            signature: row.signature,
            valid: row.valid,
            created_at: row.created_at,
        }
    }
}

/// Validated, signed insert data for a new employee record
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub ref_id: String,
    pub gender: String,
    pub purpose: String,
    pub expiry: Option<DateTime<Utc>>,
    pub signature: String,
}

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new employee record, valid by default
    ///
    /// Duplicate reference identifiers are rejected by the UNIQUE constraint
    /// in the schema, so concurrent creates for the same reference yield
    /// exactly one success.
    pub async fn create(&self, data: NewEmployee) -> RepoResult<Employee> {
        let row: EmployeeRow = sqlx::query_as(&format!(
            "INSERT INTO employees (name, ref_id, gender, purpose, expiry, signature, valid, created_at)
             VALUES (?, ?, ?, ?, ?, ?, 1, ?)
             RETURNING {COLUMNS}"
        ))
        .bind(data.name)
        .bind(data.ref_id)
        .bind(data.gender)
        .bind(data.purpose)
        .bind(data.expiry)
        .bind(data.signature)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    /// Find an employee by reference identifier
    pub async fn find_by_ref(&self, ref_id: &str) -> RepoResult<Option<Employee>> {
        let row: Option<EmployeeRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM employees WHERE ref_id = ?"))
                .bind(ref_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Into::into))
    }

    /// List all employee records
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let rows: Vec<EmployeeRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM employees ORDER BY created_at"))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Toggle the revocation flag on a record
    ///
    /// Records are never deleted; `valid = false` is the only revocation
    /// mechanism.
    pub async fn set_valid(&self, ref_id: &str, valid: bool) -> RepoResult<Employee> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!(
            "UPDATE employees SET valid = ? WHERE ref_id = ? RETURNING {COLUMNS}"
        ))
        .bind(valid)
        .bind(ref_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Into::into)
            .ok_or_else(|| RepoError::NotFound(format!("Employee {ref_id} not found")))
    }
}
