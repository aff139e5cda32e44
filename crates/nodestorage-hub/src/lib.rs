//! NodeStorage Hub - the thread-safe store around the pure reducer
//!
//! ## Architecture
//!
//! ```text
//! Store (owns the published State)
//!  │
//!  ├── dispatch lock   ← one reduce + publish + notify cycle at a time
//!  ├── ArcSwap<State>  ← lock-free reads via state()
//!  ├── Registry        ← callbacks, notified in registration order
//!  └── Journal         ← optional ring of recently applied actions
//! ```
//!
//! ## Design Principles
//!
//! 1. **nodestorage-core stays pure** - it does NOT know about locking or subscribers
//! 2. **Notifications carry no payload** - subscribers re-read `Store::state()`
//! 3. **Publication happens before notification** - subscribers never see a stale state
//!
//! Log events are emitted through `tracing`; install a subscriber in the host
//! binary to see them.

mod config;
mod error;
mod journal;
mod store;
mod subscription;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use journal::JournalEntry;
pub use store::Store;
pub use subscription::{Subscription, SubscriptionId};
