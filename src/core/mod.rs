pub mod member;
pub mod contribution;
pub mod ledger;
pub mod clock;

pub use member::Member;
pub use contribution::{Amount, Contribution};
pub use ledger::Ledger;
pub use clock::{Clock, SystemClock};
