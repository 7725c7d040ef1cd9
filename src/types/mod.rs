pub mod error;
pub mod rank_entry;
pub mod listing;
pub mod version;

pub use error::ConfigError;
pub use rank_entry::RankEntry;
pub use listing::RankedListing;
pub use version::ListingVersion;
