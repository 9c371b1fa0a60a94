mod codec;

pub use builder::Builder;
