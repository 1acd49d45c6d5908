//! Fake category builders for tests
//!
//! Enabled inside this crate's tests and, for downstream crates, through
//! the `testing` feature.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::category::{Category, CategoryProps, NAME_MAX_LENGTH};
use crate::value_objects::CategoryId;

type Factory<T> = Arc<dyn Fn(usize) -> T + Send + Sync>;

/// A fixed value or a per-index factory
#[derive(Clone)]
enum Prop<T> {
    Value(T),
    Factory(Factory<T>),
}

impl<T: Clone> Prop<T> {
    fn get(&self, index: usize) -> T {
        match self {
            Prop::Value(value) => value.clone(),
            Prop::Factory(factory) => factory(index),
        }
    }
}

/// Builds one or many valid-looking categories with random names and
/// descriptions
#[derive(Clone)]
pub struct CategoryFakeBuilder {
    count: usize,
    category_id: Option<Prop<CategoryId>>,
    name: Prop<String>,
    description: Prop<Option<String>>,
    is_active: bool,
    created_at: Option<Prop<DateTime<Utc>>>,
}

impl CategoryFakeBuilder {
    pub fn a_category() -> Self {
        Self::with_count(1)
    }

    pub fn the_categories(count: usize) -> Self {
        Self::with_count(count)
    }

    fn with_count(count: usize) -> Self {
        Self {
            count,
            category_id: None,
            name: Prop::Factory(Arc::new(|_| random_word(3, 10))),
            description: Prop::Factory(Arc::new(|_| Some(random_paragraph()))),
            is_active: true,
            created_at: None,
        }
    }

    pub fn with_category_id(mut self, id: CategoryId) -> Self {
        self.category_id = Some(Prop::Value(id));
        self
    }

    pub fn with_category_id_fn(
        mut self,
        factory: impl Fn(usize) -> CategoryId + Send + Sync + 'static,
    ) -> Self {
        self.category_id = Some(Prop::Factory(Arc::new(factory)));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Prop::Value(name.into());
        self
    }

    pub fn with_name_fn(
        mut self,
        factory: impl Fn(usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.name = Prop::Factory(Arc::new(factory));
        self
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = Prop::Value(description.map(str::to_string));
        self
    }

    pub fn with_description_fn(
        mut self,
        factory: impl Fn(usize) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.description = Prop::Factory(Arc::new(factory));
        self
    }

    pub fn activate(mut self) -> Self {
        self.is_active = true;
        self
    }

    pub fn deactivate(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(Prop::Value(created_at));
        self
    }

    pub fn with_created_at_fn(
        mut self,
        factory: impl Fn(usize) -> DateTime<Utc> + Send + Sync + 'static,
    ) -> Self {
        self.created_at = Some(Prop::Factory(Arc::new(factory)));
        self
    }

    /// Name one character over the limit, or the given value
    pub fn with_invalid_name_too_long(mut self, name: Option<&str>) -> Self {
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| random_word(NAME_MAX_LENGTH + 1, NAME_MAX_LENGTH + 1));
        self.name = Prop::Value(name);
        self
    }

    pub fn build(&self) -> Vec<Category> {
        (0..self.count).map(|index| self.build_at(index)).collect()
    }

    /// First built category
    pub fn build_one(&self) -> Category {
        self.build_at(0)
    }

    fn build_at(&self, index: usize) -> Category {
        let mut category = Category::new(CategoryProps {
            category_id: self
                .category_id
                .as_ref()
                .map(|prop| prop.get(index))
                .unwrap_or_default(),
            name: self.name.get(index),
            description: self.description.get(index),
            is_active: Some(self.is_active),
            created_at: self
                .created_at
                .as_ref()
                .map(|prop| prop.get(index))
                .unwrap_or_else(Utc::now),
        });
        category.validate(&[]);
        category
    }

    pub fn name(&self) -> String {
        self.name.get(0)
    }

    pub fn description(&self) -> Option<String> {
        self.description.get(0)
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

fn random_word(min: usize, max: usize) -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(min..=max);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn random_paragraph() -> String {
    let words = rand::thread_rng().gen_range(5..15);
    let mut text = (0..words)
        .map(|_| random_word(2, 9))
        .collect::<Vec<_>>()
        .join(" ");
    text.push('.');
    text
}
