pub mod context;
pub mod issue_management;
pub mod merge;
pub mod release;
pub mod select;
pub mod source;

// Re-export the main types and operations for convenience
pub use context::{AnnouncementMetadata, announcement_context};
pub use issue_management::{IssueManagement, IssueManagementError, validate_issue_management};
pub use merge::{find_release, merge_releases};
pub use release::{Action, Release};
pub use select::{ReleaseNotFound, latest_release, strip_snapshot};
pub use source::ReleaseSource;
