// Form state: the canonical résumé document and its four reducer operations.
// Handlers never mutate the document directly; they send a FormAction to the session.

pub mod handlers;
pub mod reducer;
pub mod store;

pub use reducer::FormError;
pub use store::{DocumentSnapshot, FormAction, FormStateStore, FormView, SectionSummary};
