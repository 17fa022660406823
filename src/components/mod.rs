//! Built-in components: Button, Accordion, CharacterCount, ErrorSummary, Tabs.

pub mod accordion;
pub mod button;
pub mod character_count;
pub mod error_summary;
pub mod tabs;

pub use accordion::Accordion;
pub use button::Button;
pub use character_count::CharacterCount;
pub use error_summary::ErrorSummary;
pub use tabs::Tabs;
