pub mod document;
pub mod lines;
pub mod slice;
pub mod span;
pub mod view;

pub use document::RopeDocument;
pub use lines::{LineMetrics, LineRef, lines_with_spans};
pub use slice::{preview, slice_to_string};
pub use span::{LineRange, Span};
pub use view::DocumentView;
