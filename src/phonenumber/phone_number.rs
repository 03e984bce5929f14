// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::hash::{Hash, Hasher};

use log::warn;

use super::{enums::PhoneNumberType, errors::PhoneNumberError};
use crate::i18n::RegionCode;

// Helper type for Result
pub type Result<T> = std::result::Result<T, PhoneNumberError>;

/// A phone number that has already been parsed and validated by the parsing
/// engine.
///
/// Two numbers are equal when their country code, leading zero flag,
/// national number and extension are equal. The raw input and the number
/// type are not part of the identity, so `"+1 (650) 555-1234"` and
/// `"16505551234"` yield equal values.
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    /// The exact string the engine parsed.
    raw_input: String,
    country_code: u32,
    /// Some countries (e.g. Italy) keep a significant leading zero that
    /// `national_number` cannot represent.
    has_leading_zero: bool,
    national_number: u64,
    extension: Option<String>,
    number_type: PhoneNumberType,
}

impl PhoneNumber {
    /// Assembles a phone number from values produced by the parsing engine.
    ///
    /// No validation or normalization happens here, the engine is
    /// responsible for handing in consistent values. `extension` must be
    /// `None` rather than an empty string when there is no extension.
    pub fn new(
        raw_input: impl Into<String>,
        country_code: u32,
        has_leading_zero: bool,
        national_number: u64,
        extension: Option<String>,
        number_type: PhoneNumberType,
    ) -> Self {
        Self {
            raw_input: raw_input.into(),
            country_code,
            has_leading_zero,
            national_number,
            extension,
            number_type,
        }
    }

    /// Returns the value used to represent "not a phone number".
    ///
    /// Every numeric field is zero, but only [`PhoneNumber::is_unparsed`]
    /// tells it apart from a real result.
    pub fn not_phone_number() -> Self {
        Self::new("", 0, false, 0, None, PhoneNumberType::NotParsed)
    }

    /// Returns true if this value does not hold a parsed number.
    pub fn is_unparsed(&self) -> bool {
        self.number_type == PhoneNumberType::NotParsed
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn country_code(&self) -> u32 {
        self.country_code
    }

    pub fn has_leading_zero(&self) -> bool {
        self.has_leading_zero
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn number_type(&self) -> PhoneNumberType {
        self.number_type
    }

    /// Formerly parsed `raw_number` using the default region.
    ///
    /// Always fails with [`PhoneNumberError::Deprecated`].
    #[deprecated(since = "0.1.0", note = "use the parsing engine to produce phone numbers")]
    pub fn from_raw_number(raw_number: &str) -> Result<Self> {
        Self::reject_raw_number(raw_number, RegionCode::get_unknown())
    }

    /// Formerly parsed `raw_number` using a custom region.
    ///
    /// Always fails with [`PhoneNumberError::Deprecated`].
    #[deprecated(since = "0.1.0", note = "use the parsing engine to produce phone numbers")]
    pub fn from_raw_number_with_region(raw_number: &str, region: &str) -> Result<Self> {
        Self::reject_raw_number(raw_number, region)
    }

    fn reject_raw_number(raw_number: &str, region: &str) -> Result<Self> {
        warn!(
            "Refusing to parse {:?} for region {}: raw string construction is deprecated",
            raw_number, region
        );
        Err(PhoneNumberError::Deprecated)
    }

    /// Fields that make up the identity of a number. Both `PartialEq` and
    /// `Hash` go through here.
    fn identity(&self) -> (u32, bool, u64, Option<&str>) {
        (
            self.country_code,
            self.has_leading_zero,
            self.national_number,
            self.extension.as_deref(),
        )
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}
