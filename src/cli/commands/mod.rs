pub mod buy;
pub mod market;
pub mod query;
pub mod register;
pub mod verify;
