//! Domain models for the storefront and back-office.

pub mod banner;
pub mod brand;
pub mod cart;
pub mod gallery;
pub mod order;
pub mod product;
pub mod recycle;
pub mod rental;
pub mod resource;
pub mod review;
pub mod session;
pub mod user;

pub use banner::CategoryBanner;
pub use brand::Brand;
pub use cart::CartLine;
pub use gallery::GalleryItem;
pub use order::{Order, OrderItem};
pub use product::Product;
pub use recycle::RecycleItem;
pub use rental::{RentalItem, RentalRequest};
pub use resource::Resource;
pub use review::Review;
pub use session::{CurrentUser, session_keys};
pub use user::User;
