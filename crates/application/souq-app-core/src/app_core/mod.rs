pub mod events;
pub mod reducer;

pub use events::DomainEvent;
pub use reducer::reduce;
