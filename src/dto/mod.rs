mod requests;
mod responses;

pub use requests::{CreateThoughtRequest, ListThoughtsQuery};
pub use responses::SessionResponse;
