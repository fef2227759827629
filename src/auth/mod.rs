pub mod authorizor;
mod catalog;
mod user;

pub use catalog::Catalog;
pub use user::User;
