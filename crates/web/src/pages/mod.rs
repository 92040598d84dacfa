// =============================================================================
// Mobaus Web - Page Components
// =============================================================================

pub mod download;
pub mod features;
pub mod home;
pub mod not_found;

pub use download::DownloadPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
