pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewNews, News, NewsListing, NewsUpdate};
pub use repository::{NewsReadRepository, NewsWriteRepository};
pub use value_objects::{DateOrder, NewsContent, NewsId, NewsTitle};
