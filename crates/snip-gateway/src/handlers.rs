pub mod health;
pub mod url;

pub use health::health_handler;
pub use url::{create_url_handler, delete_url_handler, get_url_handler, redirect_handler};
