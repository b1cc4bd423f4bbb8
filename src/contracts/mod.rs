mod addresses;
pub use addresses::*;

mod balance;
pub use balance::*;

mod errors;
pub use errors::*;

mod interfaces;
pub use interfaces::*;
