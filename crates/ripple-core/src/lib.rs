pub mod animator;
pub mod color;
pub mod constants;
pub mod ease;
pub mod error;
pub mod layout;
pub mod style;
pub mod timeline;

pub use animator::*;
pub use color::Rgb;
pub use constants::*;
pub use ease::Ease;
pub use error::{ConfigError, ConfigResult};
pub use layout::*;
pub use style::{MarkerStyle, StyleChange};
pub use timeline::{Targets, Timeline};
