//! Typed representations of the API's JSON objects.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ApiStatus`] | Status object present in every response body |
//! | [`Concept`] | Label attached to inputs or returned by predictions |
//! | [`Input`] / [`Image`] | Images submitted for prediction or indexing |
//! | [`Model`] | Hosted model and its active version |
//! | [`Output`] | Per-input prediction result |
//! | [`Pagination`] | Page selection for list endpoints |

pub mod concept;
pub mod input;
pub mod model;
pub mod output;
pub mod pagination;
pub mod status;

pub use concept::Concept;
pub use input::{Image, Input, InputData};
pub use model::{Model, ModelVersion, OutputConfig, OutputInfo};
pub use output::{Output, OutputData};
pub use pagination::Pagination;
pub use status::{ApiStatus, StatusOrigin};
