mod id;
mod location;
mod metadata;
mod profile;
mod record;
mod reference;

pub use self::id::ArtworkId;
pub use self::location::ResolvedLocation;
pub use self::metadata::ArtworkMetadata;
pub use self::profile::LibraryProfile;
pub use self::record::{FailureReason, ResolutionRecord, Status};
pub use self::reference::Reference;
