mod school;

pub use school::{SchoolService, ADD_SCHOOL_FAILED, FETCH_SCHOOLS_FAILED};
