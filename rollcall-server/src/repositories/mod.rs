mod group;
mod response;

pub use group::GroupRepository;
pub use response::ResponseRepository;
