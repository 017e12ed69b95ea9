pub mod constants;
pub mod mode;
pub mod painter;
pub mod particles;
pub mod pointer;
pub mod sim;
pub mod surface;
pub mod wave;

pub use mode::*;
pub use painter::*;
pub use particles::*;
pub use pointer::*;
pub use sim::*;
pub use surface::*;
pub use wave::*;
