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

use thiserror::Error;

/// Errors reported around parsed phone numbers.
///
/// Everything except `Deprecated` is reported by the parsing engine. The
/// value type itself only ever fails with `Deprecated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PhoneNumberError {
    #[error("A general error occurred")]
    GeneralError,
    /// The country code does not belong to a supported country or
    /// non-geographical entity.
    #[error("The country code supplied did not belong to a supported country or non-geographical entity")]
    InvalidCountryCode,
    #[error("The string supplied did not seem to be a phone number")]
    NotANumber,
    #[error("The phone number type could not be determined")]
    UnknownType,
    #[error("The string supplied is too long to be a phone number")]
    TooLong,
    #[error("The string supplied is too short to be a phone number")]
    TooShort,
    /// Returned by construction paths that used to parse raw strings.
    /// Permanent: retrying never helps, the caller must switch to the
    /// parsing engine.
    #[error("This function is deprecated, use the parsing engine to produce phone numbers")]
    Deprecated,
}
