mod phonenumber;
pub mod i18n;

#[cfg(test)]
mod tests;

pub use phonenumber::{PhoneNumber, PhoneNumberError, PhoneNumberType, Result};
