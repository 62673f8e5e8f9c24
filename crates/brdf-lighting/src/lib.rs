//! Scene-side controls of the material editor: the directional key light and
//! the spinning preview model.

mod directional;
mod spinner;

pub use directional::{DirectionalLight, DirectionalLightUniform, LightControls};
pub use spinner::Spinner;
