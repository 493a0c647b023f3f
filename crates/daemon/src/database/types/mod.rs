mod djson;
mod duuid;

pub use djson::DJson;
pub use duuid::DUuid;
