//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static export only)
//! └── LandingPage
//!     ├── PageHeader
//!     ├── FeatureGrid
//!     │   └── FeatureCard (x6)
//!     ├── BenefitsSection
//!     ├── ProcessSection
//!     ├── CallToAction
//!     └── FeatureDialogs
//!         └── FeatureDialog (while open)
//! ```
//!
//! Components read content from [`crate::catalog`] directly; only the
//! interactive ones take a [`crate::state::PageState`].

mod benefits;
mod cta;
mod document;
mod features;
mod header;
mod icons;
mod landing;
mod process;

pub use benefits::BenefitsSection;
pub use cta::CallToAction;
pub use document::PageDocument;
pub use features::{FeatureCard, FeatureDialogs, FeatureGrid};
pub use header::PageHeader;
pub use icons::*;
pub use landing::LandingPage;
pub use process::ProcessSection;
