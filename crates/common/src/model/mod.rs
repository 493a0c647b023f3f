mod account;
mod avatar;
mod entries;
mod post;
mod profile;

pub use account::Account;
pub use avatar::gravatar_url;
pub use entries::{EntryList, Keyed};
pub use post::{Comment, CommentError, Like, LikeError, Post};
pub use profile::{
    parse_skills, Education, EntryNotFound, Experience, NewEducation, NewExperience, Profile,
    ProfileFields, SocialLinks,
};
