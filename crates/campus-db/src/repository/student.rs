//! SurrealDB implementation of [`StudentRepository`].

use campus_core::error::CampusResult;
use campus_core::id::DocumentId;
use campus_core::models::student::{CreateStudent, Student, StudentAddress, UpdateStudent};
use campus_core::repository::{Pagination, StudentFilter, StudentRepository};
use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

/// DB-side representation of the inline address object.
#[derive(Debug, SurrealValue)]
struct AddressRow {
    country: String,
    town: String,
    address_string: String,
}

impl From<StudentAddress> for AddressRow {
    fn from(address: StudentAddress) -> Self {
        Self {
            country: address.country,
            town: address.town,
            address_string: address.address_string,
        }
    }
}

impl From<AddressRow> for StudentAddress {
    fn from(row: AddressRow) -> Self {
        Self {
            country: row.country,
            town: row.town,
            address_string: row.address_string,
        }
    }
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct StudentRow {
    record_id: String,
    name: String,
    surname: String,
    group_id: String,
    birth_date: DateTime<Utc>,
    phone_numbers: Option<Vec<String>>,
    address: Option<AddressRow>,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

impl StudentRow {
    fn try_into_student(self) -> Result<Student, DbError> {
        let id = DocumentId::parse(&self.record_id)
            .ok_or_else(|| DbError::Malformed(format!("invalid record id: {}", self.record_id)))?;
        let group_id = DocumentId::parse(&self.group_id)
            .ok_or_else(|| DbError::Malformed(format!("invalid group id: {}", self.group_id)))?;
        Ok(Student {
            id,
            name: self.name,
            surname: self.surname,
            group_id,
            birth_date: self.birth_date,
            phone_numbers: self.phone_numbers,
            address: self.address.map(StudentAddress::from),
        })
    }
}

/// SurrealDB implementation of the Student repository.
#[derive(Clone)]
pub struct SurrealStudentRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealStudentRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> StudentRepository for SurrealStudentRepository<C> {
    async fn create(&self, input: CreateStudent) -> CampusResult<DocumentId> {
        let id = DocumentId::generate();

        let mut sets = vec![
            "name = $name",
            "surname = $surname",
            "group_id = $group_id",
            "birth_date = <datetime> $birth_date",
        ];
        if input.phone_numbers.is_some() {
            sets.push("phone_numbers = $phone_numbers");
        }
        if input.address.is_some() {
            sets.push("address = $address");
        }

        let query = format!("CREATE type::record('student', $id) SET {}", sets.join(", "));

        let mut builder = self
            .db
            .query(&query)
            .bind(("id", id.as_str().to_owned()))
            .bind(("name", input.name))
            .bind(("surname", input.surname))
            .bind(("group_id", input.group_id))
            .bind(("birth_date", input.birth_date.to_rfc3339()));

        if let Some(phone_numbers) = input.phone_numbers {
            builder = builder.bind(("phone_numbers", phone_numbers));
        }
        if let Some(address) = input.address {
            builder = builder.bind(("address", AddressRow::from(address)));
        }

        let result = builder.await.map_err(DbError::from)?;
        result
            .check()
            .map_err(|e| DbError::Constraint(e.to_string()))?;

        Ok(id)
    }

    async fn get_by_id(&self, id: &DocumentId) -> CampusResult<Option<Student>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM type::record('student', $id)",
            )
            .bind(("id", id.as_str().to_owned()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<StudentRow> = result.take(0).map_err(DbError::from)?;

        Ok(rows
            .into_iter()
            .next()
            .map(|row| row.try_into_student())
            .transpose()?)
    }

    async fn update(&self, id: &DocumentId, input: UpdateStudent) -> CampusResult<()> {
        let mut sets = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name");
        }
        if input.surname.is_some() {
            sets.push("surname = $surname");
        }
        if input.group_id.is_some() {
            sets.push("group_id = $group_id");
        }
        if input.birth_date.is_some() {
            sets.push("birth_date = <datetime> $birth_date");
        }
        if input.phone_numbers.is_some() {
            sets.push("phone_numbers = $phone_numbers");
        }
        if input.address.is_some() {
            sets.push("address = $address");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('student', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("id", id.as_str().to_owned()));

        if let Some(name) = input.name {
            builder = builder.bind(("name", name));
        }
        if let Some(surname) = input.surname {
            builder = builder.bind(("surname", surname));
        }
        if let Some(group_id) = input.group_id {
            builder = builder.bind(("group_id", group_id));
        }
        if let Some(birth_date) = input.birth_date {
            builder = builder.bind(("birth_date", birth_date.to_rfc3339()));
        }
        if let Some(phone_numbers) = input.phone_numbers {
            builder = builder.bind(("phone_numbers", phone_numbers));
        }
        if let Some(address) = input.address {
            builder = builder.bind(("address", AddressRow::from(address)));
        }

        let result = builder.await.map_err(DbError::from)?;
        result
            .check()
            .map_err(|e| DbError::Constraint(e.to_string()))?;

        Ok(())
    }

    async fn find(
        &self,
        filter: StudentFilter,
        pagination: Option<Pagination>,
    ) -> CampusResult<Vec<Student>> {
        let mut conditions = Vec::new();
        if filter.name.is_some() {
            conditions.push("name = $name");
        }
        if filter.surname.is_some() {
            conditions.push("surname = $surname");
        }
        if filter.group_id.is_some() {
            conditions.push("group_id = $group_id");
        }

        let mut query = String::from("SELECT meta::id(id) AS record_id, * FROM student");
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY created_at ASC");
        if pagination.is_some() {
            query.push_str(" LIMIT $limit START $skip");
        }

        let mut builder = self.db.query(&query);
        if let Some(name) = filter.name {
            builder = builder.bind(("name", name));
        }
        if let Some(surname) = filter.surname {
            builder = builder.bind(("surname", surname));
        }
        if let Some(group_id) = filter.group_id {
            builder = builder.bind(("group_id", group_id.as_str().to_owned()));
        }
        if let Some(pagination) = pagination {
            builder = builder
                .bind(("limit", pagination.limit))
                .bind(("skip", pagination.skip));
        }

        let mut result = builder.await.map_err(DbError::from)?;
        let rows: Vec<StudentRow> = result.take(0).map_err(DbError::from)?;

        let students = rows
            .into_iter()
            .map(|row| row.try_into_student())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(students)
    }

    async fn delete(&self, id: &DocumentId) -> CampusResult<()> {
        self.db
            .query("DELETE type::record('student', $id)")
            .bind(("id", id.as_str().to_owned()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
