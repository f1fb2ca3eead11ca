//! Classified documents
//!
//! Document classification is conditioned on the document category: each
//! category maps to a restricted subset of the clearance scale and the
//! classification is drawn only from that subset.

pub mod asset;
pub mod generator;

pub use asset::{Asset, AssetCategory, AssetMetadata, AssetStatus, EncryptionLevel};
pub use generator::AssetGenerator;
