pub mod candidates;
pub mod catalog;
pub mod correction;
pub mod engine;
pub mod external;
pub mod rule;
pub mod settings;
pub mod style;
pub mod text;

pub use candidates::{Candidate, Origin};
pub use correction::{Correction, CorrectionResult};
pub use engine::explain::{format_text, Explanation};
pub use engine::{Engine, EngineError};
pub use external::{ExternalError, ExternalGenerator, ExternalSource};
pub use style::StyleProfile;
