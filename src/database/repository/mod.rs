// Persistence wrappers, one module per entity. Every fn takes the pool
// explicitly; each statement commits on its own.
pub mod articles;
pub mod clients;
pub mod nutritionists;
pub mod subscriptions;
