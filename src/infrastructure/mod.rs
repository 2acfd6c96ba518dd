pub mod bootstrap;
pub mod db;
pub mod repositories;
