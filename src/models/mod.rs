pub mod item;
pub mod list;
pub mod user;

pub use item::{ItemInput, ItemPatch, TodoItem};
pub use list::{Collaborator, ListInput, ShareRequest, TodoList};
pub use user::{User, UserResponse};
