#![doc = r#"
The decoded form of channel voice events
"#]

mod channel;
pub use channel::*;

mod ticked;
pub use ticked::*;
