pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::auth::service::AuthService;
pub use domain::user;
pub use domain::user::service::UserService;
pub use outbound::repositories;
