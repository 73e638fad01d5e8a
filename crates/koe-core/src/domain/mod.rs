//! Domain model (IDs, storage keys, requests, records, errors).

pub mod errors;
pub mod ids;
pub mod key;
pub mod link;
pub mod record;
pub mod request;

pub use self::errors::{ConvertError, ErrorKind};
pub use self::ids::ArtifactId;
pub use self::key::StorageKey;
pub use self::link::AccessLink;
pub use self::record::UsageRecord;
pub use self::request::SynthesisRequest;
