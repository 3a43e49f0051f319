// User management module

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

pub use error::UserError;
pub use memory::InMemoryUserStore;
pub use models::{User, UserDetailResponse};
pub use repository::{PgUserStore, StoreError, UserStore};
pub use service::UserService;
