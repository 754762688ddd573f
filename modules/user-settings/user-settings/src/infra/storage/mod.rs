pub mod file_repo;
pub mod mapper;
pub mod memory_repo;
pub mod record;
pub mod users_memory_repo;

#[cfg(test)]
mod mapper_test;
