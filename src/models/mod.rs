pub mod clock;
pub mod fleet;
pub mod route;
pub mod shift;
pub mod stop;

pub use clock::*;
pub use fleet::*;
pub use route::*;
pub use shift::*;
pub use stop::*;
