//! Integration test support for Shopper.
//!
//! The actual tests live in `tests/`; they drive a running `shopper-api`
//! server over HTTP and are `#[ignore]`d by default since they need a live
//! server and database:
//!
//! ```bash
//! cargo run -p shopper-cli -- migrate
//! cargo run -p shopper-api &
//! cargo test -p shopper-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
