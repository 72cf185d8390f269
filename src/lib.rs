pub mod color;
pub mod color_list;
pub mod config;
pub mod error;
pub mod geometry;

pub use color::Swatch;
pub use color_list::{ChangeKind, ChangeSet, ColorList};
pub use config::{Config, HeightPattern};
pub use error::{GridError, Result};
pub use geometry::{
    AlternatingAspect, CellFrame, CellSize, FixedAspect, GeometricParams, GridLayout,
    HeightPolicy, SectionInsets,
};
