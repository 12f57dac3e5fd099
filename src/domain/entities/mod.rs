//! Domain entity definitions.

mod estimate;
mod invoice;
mod lead;
mod material;
mod project;
mod proposal;
mod resource_kind;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use estimate::{Estimate, EstimateDraft, EstimateStatus, estimate_total};
pub use invoice::{Invoice, InvoiceDraft, InvoiceStatus, ItemField, LineItem};
pub use lead::{Lead, LeadDraft, LeadSource, LeadStatus};
pub use material::{MATERIAL_CATEGORIES, MATERIAL_UNITS, Material, MaterialDraft};
pub use project::{Project, ProjectDraft, ProjectStatus, ProjectType};
pub use proposal::{Proposal, ProposalDraft, ProposalStatus};
pub use resource_kind::ResourceKind;

/// A business record persisted behind a resource port.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Create/update body for this entity.
    type Draft: Clone + Default + Send + Sync + Serialize + DeserializeOwned + 'static;

    /// Collection this entity belongs to.
    const KIND: ResourceKind;

    /// Returns the record identifier.
    fn id(&self) -> &str;

    /// Returns the editable portion of the record.
    fn to_draft(&self) -> Self::Draft;
}
