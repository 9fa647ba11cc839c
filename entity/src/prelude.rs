pub use super::course::Entity as Course;
