//! District cards: definitions, instances, and the manifest registry.
//!
//! ## Key Types
//!
//! - `DistrictKind`: Identifier for a district definition
//! - `DistrictCategory`: Noble, religious, trade, military or unique
//! - `DistrictDefinition`: Static data (name, category, cost)
//! - `CardId` / `CardInstance`: One physical copy in the match arena
//! - `DistrictRegistry`: The fixed manifest

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{DistrictCategory, DistrictDefinition, DistrictKind};
pub use instance::{CardId, CardInstance};
pub use registry::DistrictRegistry;
