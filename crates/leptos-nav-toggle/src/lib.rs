mod config;
#[cfg(feature = "dom")]
mod dom;
mod error;
mod nav_toggle;
mod state;

pub mod prelude {
    pub use crate::config::*;
    #[cfg(feature = "dom")]
    pub use crate::dom::*;
    pub use crate::error::*;
    pub use crate::nav_toggle::*;
    pub use crate::state::*;
}
