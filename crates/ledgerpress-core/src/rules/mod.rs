pub mod slug;
pub mod validation;

pub use slug::derive_slug;
pub use validation::{
    canonical_address, is_valid_address, is_valid_name, is_valid_slug, same_address,
    validate_address, validate_name, validate_slug, MAX_NAME_LEN, MAX_SLUG_LEN,
};
