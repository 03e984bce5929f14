pub mod errors;
pub mod enums;
pub mod phone_number;

pub use enums::PhoneNumberType;
pub use errors::PhoneNumberError;
pub use phone_number::{PhoneNumber, Result};
