pub mod actors;
pub mod png;
pub mod sheet;

pub use actors::{ActorData, ActorImageSource, AssetError, FrameData, RawImage};
pub use sheet::ActorImagePack;
