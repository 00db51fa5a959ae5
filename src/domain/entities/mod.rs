//! Domain entity definitions.

mod access_token;
mod album;
mod artist;
mod image_descriptor;
mod module_name;

pub use access_token::AccessToken;
pub use album::{Album, PreparedAlbum};
pub use artist::{Artist, ArtistSource, ImageRef};
pub use image_descriptor::ImageDescriptor;
pub use module_name::ModuleName;
