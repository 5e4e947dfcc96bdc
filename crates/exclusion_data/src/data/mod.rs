pub mod event;
pub mod lattice;
pub mod rates;
pub mod trajectory;
