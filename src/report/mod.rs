// Spec sheet production
pub mod delivery;
pub mod layout;
pub mod metrics;
pub mod render;

pub use delivery::{DeliveryError, CONTENT_TYPE, FILENAME};
pub use layout::{build_blocks, paginate, Block, BlockStyle, FontHint, PageGeometry};
pub use render::{render, RenderError, Report, ReportOptions, ReportRenderer};
