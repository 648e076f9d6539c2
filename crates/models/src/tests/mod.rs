/// CRUD operations tests for the password entity
pub mod crud_tests;
