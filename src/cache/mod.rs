//! Local recipe cache
//!
//! Every package cloned from the AUR lives in its own directory under
//! `~/.cache/caur/`. A directory that already exists is reused on the next
//! install, so the cache doubles as a record of what was fetched.
//!
//! | Path | Lifecycle |
//! |------|-----------|
//! | `~/.cache/caur/` | created at startup (mode 0700), never removed |
//! | `~/.cache/caur/<pkg>/` | created on install, removed on clear |

mod root;

pub use root::CacheRoot;
