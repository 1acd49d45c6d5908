//! Application state for the API server

use std::sync::Arc;
use std::time::Instant;

use catalog_application::{
    ActivateCategoryUseCase, CreateCategoryUseCase, DeactivateCategoryUseCase,
    DeleteCategoryUseCase, GetCategoryUseCase, ListCategoriesUseCase, UpdateCategoryUseCase,
};
use catalog_domain::repositories::CategoryRepository;

/// Application state shared across REST handlers and GraphQL resolvers
#[derive(Clone)]
pub struct AppState {
    pub create_category: Arc<CreateCategoryUseCase>,
    pub get_category: Arc<GetCategoryUseCase>,
    pub list_categories: Arc<ListCategoriesUseCase>,
    pub update_category: Arc<UpdateCategoryUseCase>,
    pub delete_category: Arc<DeleteCategoryUseCase>,
    pub activate_category: Arc<ActivateCategoryUseCase>,
    pub deactivate_category: Arc<DeactivateCategoryUseCase>,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Wire every use case to the same repository
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            create_category: Arc::new(CreateCategoryUseCase::new(Arc::clone(&repository))),
            get_category: Arc::new(GetCategoryUseCase::new(Arc::clone(&repository))),
            list_categories: Arc::new(ListCategoriesUseCase::new(Arc::clone(&repository))),
            update_category: Arc::new(UpdateCategoryUseCase::new(Arc::clone(&repository))),
            delete_category: Arc::new(DeleteCategoryUseCase::new(Arc::clone(&repository))),
            activate_category: Arc::new(ActivateCategoryUseCase::new(Arc::clone(&repository))),
            deactivate_category: Arc::new(DeactivateCategoryUseCase::new(repository)),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
