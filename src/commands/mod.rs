pub mod pull;
pub mod push;
pub mod watch;

pub use pull::Pull;
pub use push::Push;
pub use watch::Watch;
