//! Background tasks.
//!
//! Each submodule provides a long-running async function meant for
//! `tokio::spawn`. All tasks take a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! and return once it is cancelled.

pub mod session_cleanup;
