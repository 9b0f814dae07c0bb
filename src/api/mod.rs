pub mod handlers;
pub mod pagination;
pub mod state;
pub mod view;

pub use handlers::*;
pub use pagination::*;
pub use state::PageState;
pub use view::*;
