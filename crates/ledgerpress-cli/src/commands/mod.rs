pub mod content;
pub mod intent;
pub mod records;
pub mod site;
pub mod slug;
pub mod validate;
