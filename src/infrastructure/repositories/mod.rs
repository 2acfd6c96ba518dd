mod school_repository;
mod traits;

pub use school_repository::SchoolRepositoryImpl;
pub use traits::SchoolRepository;
