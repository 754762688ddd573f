pub mod dto;
pub mod handlers;
pub mod response;
pub mod routes;

#[cfg(test)]
mod dto_test;
