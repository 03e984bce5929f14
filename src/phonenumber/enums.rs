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

use strum::EnumIter;

/// Categorizes phone numbers based on their primary use.
///
/// The classification is produced by the parsing engine. A [`PhoneNumber`]
/// only carries it around, it never derives or checks it.
///
/// [`PhoneNumber`]: crate::PhoneNumber
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a specific geographic location.
    FixedLine,
    /// **Mobile numbers.**
    Mobile,
    /// **Fixed-line or mobile.**
    /// Used in regions (e.g., the USA) where it's impossible to distinguish between
    /// fixed-line and mobile numbers by looking at the phone number itself.
    FixedLineOrMobile,
    /// **Toll-free numbers.**
    /// Calls are paid by the recipient, e.g. "800" or "888" numbers in the US.
    TollFree,
    /// **Premium-rate numbers.**
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// **Voice over IP (VoIP) numbers.**
    VoIP,
    /// **Personal numbers.**
    /// Associated with a person rather than a location or device.
    PersonalNumber,
    /// **Pagers.**
    Pager,
    /// **Universal Access Numbers (UAN).**
    UAN,
    /// **Voicemail access numbers.**
    VoiceMail,
    /// **Unknown type.**
    /// The number was parsed but does not match any of the known patterns
    /// for its region.
    Unknown,
    /// **Not parsed.**
    /// Reserved for values that do not hold a phone number at all, see
    /// [`PhoneNumber::not_phone_number`](crate::PhoneNumber::not_phone_number).
    NotParsed,
}
