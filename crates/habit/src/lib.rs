mod completion;
mod scheduler;
mod types;

pub use completion::*;
pub use scheduler::*;
pub use types::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}
