pub mod card;
pub mod catalog;
pub mod price;
pub mod sub;

pub use card::*;
pub use catalog::*;
pub use price::*;
pub use sub::*;
