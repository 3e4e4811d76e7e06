pub use super::director::Entity as Director;
pub use super::genre::Entity as Genre;
pub use super::movie::Entity as Movie;
