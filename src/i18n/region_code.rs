/// Helpers for the region codes this crate refers to.
pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    ///
    /// Used as the default region when a caller does not supply one.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
