//! SQLite-backed category repository
//!
//! Searches run in SQL: `LIKE` for the name filter, an `ORDER BY` picked
//! from a fixed field map, and `LIMIT`/`OFFSET` for the page. The total is
//! a separate `COUNT(*)` over the same filter.

use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};
use tracing::debug;

use catalog_domain::{
    category::{Category, CategoryFilter, CATEGORY_SORTABLE_FIELDS},
    entity::Entity,
    errors::{DomainError, DomainResult},
    repositories::{ExistsResult, Repository, SearchableRepository},
    search::{SearchParams, SearchResult, SortDirection},
    value_objects::CategoryId,
};

use super::category_model::{CategoryModel, CATEGORY_COLUMNS};
use super::connection::LOWER_UNICODE;
use crate::error::PersistenceError;

const DEFAULT_ORDER: &str = "created_at DESC";

/// SQLite implementation of the category repository
pub struct SqliteCategoryRepository {
    conn: Mutex<Connection>,
}

impl SqliteCategoryRepository {
    /// Wrap a migrated connection (see [`super::open_database`])
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn select(&self, clause: &str, values: Vec<Value>) -> DomainResult<Vec<Category>> {
        let conn = self.conn.lock();
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories {clause}");
        let mut stmt = conn.prepare(&sql).map_err(PersistenceError::from)?;
        let models = stmt
            .query_map(params_from_iter(values), CategoryModel::from_row)
            .map_err(PersistenceError::from)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(PersistenceError::from)?;
        models.into_iter().map(CategoryModel::to_entity).collect()
    }

    fn execute(&self, sql: &str, values: impl rusqlite::Params) -> DomainResult<usize> {
        let conn = self.conn.lock();
        Ok(conn.execute(sql, values).map_err(PersistenceError::from)?)
    }
}

/// SQL expression for a sortable field
fn order_column(field: &str) -> Option<&'static str> {
    match field {
        "name" => Some("name COLLATE BINARY"),
        "createdAt" => Some("created_at"),
        _ => None,
    }
}

/// `ORDER BY` body; unknown or missing fields fall back to newest first.
/// `rowid` breaks ties in insertion order.
fn order_by(sort: Option<&str>, direction: Option<SortDirection>) -> String {
    let order = sort
        .and_then(order_column)
        .map(|column| {
            let direction = match direction.unwrap_or_default() {
                SortDirection::Asc => "ASC",
                SortDirection::Desc => "DESC",
            };
            format!("{column} {direction}")
        })
        .unwrap_or_else(|| DEFAULT_ORDER.to_string());
    format!("{order}, rowid ASC")
}

/// `%term%` with LIKE wildcards in `term` escaped by `\`
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

fn id_values(ids: &[CategoryId]) -> Vec<Value> {
    ids.iter().map(|id| Value::Text(id.to_string())).collect()
}

#[async_trait]
impl Repository<Category> for SqliteCategoryRepository {
    async fn insert(&self, category: &Category) -> DomainResult<()> {
        let model = CategoryModel::from_entity(category);
        self.execute(
            "INSERT INTO categories (category_id, name, description, is_active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                model.category_id,
                model.name,
                model.description,
                model.is_active,
                model.created_at
            ],
        )?;
        debug!(id = %category.category_id(), "Inserted category");
        Ok(())
    }

    async fn bulk_insert(&self, categories: &[Category]) -> DomainResult<()> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction().map_err(PersistenceError::from)?;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO categories (category_id, name, description, is_active, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .map_err(PersistenceError::from)?;
            for category in categories {
                let model = CategoryModel::from_entity(category);
                stmt.execute(params![
                    model.category_id,
                    model.name,
                    model.description,
                    model.is_active,
                    model.created_at
                ])
                .map_err(PersistenceError::from)?;
            }
        }
        tx.commit().map_err(PersistenceError::from)?;
        debug!(count = categories.len(), "Bulk inserted categories");
        Ok(())
    }

    async fn update(&self, category: &Category) -> DomainResult<()> {
        let model = CategoryModel::from_entity(category);
        let changed = self.execute(
            "UPDATE categories
             SET name = ?1, description = ?2, is_active = ?3, created_at = ?4
             WHERE category_id = ?5",
            params![
                model.name,
                model.description,
                model.is_active,
                model.created_at,
                model.category_id
            ],
        )?;
        if changed != 1 {
            return Err(DomainError::not_found(Category::NAME, category.category_id()));
        }
        debug!(id = %category.category_id(), "Updated category");
        Ok(())
    }

    async fn delete(&self, id: &CategoryId) -> DomainResult<()> {
        let changed = self.execute(
            "DELETE FROM categories WHERE category_id = ?1",
            params![id.to_string()],
        )?;
        if changed != 1 {
            return Err(DomainError::not_found(Category::NAME, id));
        }
        debug!(id = %id, "Deleted category");
        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        let mut found = self.select(
            "WHERE category_id = ?1",
            vec![Value::Text(id.to_string())],
        )?;
        Ok(found.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<Category>> {
        self.select("ORDER BY rowid ASC", Vec::new())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.select(
            &format!(
                "WHERE category_id IN ({}) ORDER BY rowid ASC",
                placeholders(ids.len())
            ),
            id_values(ids),
        )
    }

    async fn exists_by_id(&self, ids: &[CategoryId]) -> DomainResult<ExistsResult<CategoryId>> {
        if ids.is_empty() {
            return Err(DomainError::InvalidArgument(
                "ids must be an array with at least one element".to_string(),
            ));
        }

        let stored: Vec<String> = {
            let conn = self.conn.lock();
            let sql = format!(
                "SELECT category_id FROM categories WHERE category_id IN ({})",
                placeholders(ids.len())
            );
            let mut stmt = conn.prepare(&sql).map_err(PersistenceError::from)?;
            let rows = stmt
                .query_map(params_from_iter(id_values(ids)), |row| row.get(0))
                .map_err(PersistenceError::from)?;
            let stored = rows
                .collect::<rusqlite::Result<Vec<String>>>()
                .map_err(PersistenceError::from)?;
            stored
        };

        let (exists, not_exists) = ids
            .iter()
            .copied()
            .partition(|id| stored.contains(&id.to_string()));
        Ok(ExistsResult { exists, not_exists })
    }
}

#[async_trait]
impl SearchableRepository<Category, CategoryFilter> for SqliteCategoryRepository {
    fn sortable_fields(&self) -> Vec<String> {
        CATEGORY_SORTABLE_FIELDS.iter().map(|f| f.to_string()).collect()
    }

    async fn search(
        &self,
        params: &SearchParams<CategoryFilter>,
    ) -> DomainResult<SearchResult<Category>> {
        let (where_clause, mut values) = match params.filter() {
            Some(term) => (
                format!("WHERE {LOWER_UNICODE}(name) LIKE ? ESCAPE '\\'"),
                vec![Value::Text(like_pattern(&term.to_lowercase()))],
            ),
            None => (String::new(), Vec::new()),
        };

        let total: i64 = {
            let conn = self.conn.lock();
            conn.query_row(
                &format!("SELECT COUNT(*) FROM categories {where_clause}"),
                params_from_iter(values.iter()),
                |row| row.get(0),
            )
            .map_err(PersistenceError::from)?
        };

        let per_page = params.per_page();
        let offset = (params.page() - 1).saturating_mul(per_page);
        values.push(Value::Integer(i64::try_from(per_page).unwrap_or(i64::MAX)));
        values.push(Value::Integer(i64::try_from(offset).unwrap_or(i64::MAX)));

        let clause = format!(
            "{where_clause} ORDER BY {} LIMIT ? OFFSET ?",
            order_by(params.sort(), params.sort_dir())
        );
        debug!(
            filter = ?params.filter(),
            page = params.page(),
            per_page,
            sort = ?params.sort(),
            "Searching categories in SQLite"
        );
        let items = self.select(&clause, values)?;

        Ok(SearchResult::new(
            items,
            usize::try_from(total).unwrap_or_default(),
            params.page(),
            per_page,
        ))
    }
}
