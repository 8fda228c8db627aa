//! External collaborators: renderer, presentation surface, asset loader.
//!
//! The game core only talks to these traits. A browser build implements
//! them over its scene graph and DOM; `headless` implements them in memory
//! for the simulator and the tests.

pub mod assets;
pub mod headless;
pub mod presenter;
pub mod scene;

pub use assets::{AssetLoader, TextureId, TextureSet};
pub use headless::{HeadlessAssets, HeadlessScene, RecordingPresenter};
pub use presenter::Presenter;
pub use scene::{NodeHandle, Scene};
