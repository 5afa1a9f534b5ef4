//! # billing-core
//!
//! Pure logic shared by the billing-link server and its WASM frontend.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────── billing-core ────────────────────────┐
//! │  ┌───────────┐   ┌─────────────┐   ┌──────────┐   ┌───────┐  │
//! │  │   phone   │   │   session   │   │  route   │   │  api  │  │
//! │  │ normalize │──▶│ PageSession │   │ variants │   │ wire  │  │
//! │  └───────────┘   └─────────────┘   └──────────┘   └───────┘  │
//! └──────────────────────────────────────────────────────────────┘
//!        ▲ used by server (canonical check)    ▲ used by web (everything)
//! ```
//!
//! Nothing here performs I/O, so every piece is testable natively and
//! compiles unchanged for `wasm32-unknown-unknown`.

pub mod api;
pub mod phone;
pub mod route;
pub mod session;

pub use api::{
    ErrorBody, HealthResponse, SetupSessionResponse, UpdatePhoneRequest, UpdatePhoneResponse,
};
pub use route::PageVariant;
pub use session::{PageSession, PhoneSave, SaveState};
