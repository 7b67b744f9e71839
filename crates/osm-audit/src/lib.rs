//! Audit passes over the tags of an OSM export.
//!
//! Each audit is an [`AuditVariant`] owning its accumulator. Audits only read
//! tags; they never influence record building. All accumulators are ordered
//! maps and sets, so results do not depend on traversal order.

mod keys;
mod names;
mod report;
mod runner;
mod streets;
mod values;

pub use keys::{AddressKeyAudit, KeyAudit, KeysWithValueAudit};
pub use names::NameAudit;
pub use report::AuditReport;
pub use runner::{AuditVariant, audit_file, run_audit};
pub use streets::StreetTypeAudit;
pub use values::{DEFAULT_SUSPICIOUS_LITERALS, SuspiciousValueAudit, ValueSetAudit, ValueTallyAudit};
