pub mod camera;
pub mod constants;
pub mod error;
pub mod field;
pub mod geometry;
pub mod layout;
pub mod math;
pub mod post;
pub mod scene;
pub mod state;
pub mod theme;

pub use camera::*;
pub use error::*;
pub use field::*;
pub use geometry::*;
pub use layout::*;
pub use math::*;
pub use post::*;
pub use scene::*;
pub use state::*;
pub use theme::*;
