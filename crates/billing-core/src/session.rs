//! Page Session
//!
//! Everything the checkout page remembers for the lifetime of one page load:
//! whether the embedded checkout has been mounted, which customer the
//! provider created, the last phone number that was saved, and the state of
//! the phone save indicator.
//!
//! ```text
//!           begin_save            finish_save(Ok)
//!   Idle ─────────────▶ Submitting ──────────────▶ Saved ──(3s, clear_saved(gen))──▶ Idle
//!                           │
//!                           └── finish_save(Err) ──▶ Failed(msg) ──(next begin_save)──▶ Submitting
//! ```

use crate::phone;

/// How long the "saved" indicator stays visible
pub const SAVED_INDICATOR_MS: u64 = 3_000;

/// State of the phone save indicator
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    Submitting,
    Saved,
    Failed(String),
}

impl SaveState {
    /// Inline status text for the phone field
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some("Saving…"),
            Self::Saved => Some("Saved"),
            Self::Failed(message) => Some(message.as_str()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// What a blur on the phone field should do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhoneSave {
    /// Nothing to send (empty field or unchanged since the last save)
    Skip,

    /// Input rejected before reaching the network
    Invalid(String),

    /// Send this canonical number for this customer
    Submit { customer_id: String, phone: String },
}

/// Client-side state for one page load
#[derive(Clone, Debug, Default)]
pub struct PageSession {
    checkout_mounted: bool,
    customer_id: Option<String>,
    last_saved_phone: Option<String>,
    save_state: SaveState,
    /// Bumped on every successful save; identifies the indicator timer
    save_generation: u64,
}

impl PageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the single embedded checkout slot for this page load.
    ///
    /// Returns `true` the first time only.
    pub fn claim_checkout_mount(&mut self) -> bool {
        if self.checkout_mounted {
            tracing::debug!("Embedded checkout already mounted, skipping");
            return false;
        }
        self.checkout_mounted = true;
        true
    }

    pub fn checkout_mounted(&self) -> bool {
        self.checkout_mounted
    }

    /// Remember the customer created for this page load
    pub fn attach_customer(&mut self, customer_id: impl Into<String>) {
        self.customer_id = Some(customer_id.into());
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn last_saved_phone(&self) -> Option<&str> {
        self.last_saved_phone.as_deref()
    }

    pub fn save_state(&self) -> &SaveState {
        &self.save_state
    }

    /// Decide what to do with the phone field's current value
    pub fn prepare_phone_save(&self, raw: &str) -> PhoneSave {
        if raw.trim().is_empty() {
            return PhoneSave::Skip;
        }

        if !phone::is_valid_phone(raw) {
            return PhoneSave::Invalid("Please enter a valid phone number".into());
        }

        let Some(customer_id) = self.customer_id.clone() else {
            return PhoneSave::Invalid("Checkout is still loading, try again in a moment".into());
        };

        let canonical = phone::to_canonical_us_format(raw);
        if self.last_saved_phone.as_deref() == Some(canonical.as_str()) {
            return PhoneSave::Skip;
        }

        PhoneSave::Submit {
            customer_id,
            phone: canonical,
        }
    }

    /// Enter `Submitting`, clearing any previous failure
    pub fn begin_save(&mut self) {
        self.save_state = SaveState::Submitting;
    }

    /// Record the outcome of an update call.
    ///
    /// On success returns the generation to hand back to [`Self::clear_saved`]
    /// once the indicator has been shown long enough.
    pub fn finish_save(&mut self, phone: &str, outcome: Result<(), String>) -> Option<u64> {
        match outcome {
            Ok(()) => {
                self.last_saved_phone = Some(phone.to_string());
                self.save_state = SaveState::Saved;
                self.save_generation += 1;
                Some(self.save_generation)
            }
            Err(message) => {
                self.save_state = SaveState::Failed(message);
                None
            }
        }
    }

    /// Show a pre-submit rejection inline
    pub fn reject(&mut self, message: impl Into<String>) {
        self.save_state = SaveState::Failed(message.into());
    }

    /// Drop the "saved" indicator once its display time is up.
    ///
    /// A timer from an earlier save (older `generation`) is ignored.
    pub fn clear_saved(&mut self, generation: u64) {
        if self.save_state == SaveState::Saved && generation == self.save_generation {
            self.save_state = SaveState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_customer() -> PageSession {
        let mut session = PageSession::new();
        session.attach_customer("cus_123");
        session
    }

    #[test]
    fn test_checkout_mount_claimed_once() {
        let mut session = PageSession::new();
        assert!(!session.checkout_mounted());
        assert!(session.claim_checkout_mount());
        assert!(!session.claim_checkout_mount());
        assert!(session.checkout_mounted());

        // A fresh page load starts over
        assert!(PageSession::new().claim_checkout_mount());
    }

    #[test]
    fn test_prepare_skips_empty_input() {
        assert_eq!(session_with_customer().prepare_phone_save("   "), PhoneSave::Skip);
    }

    #[test]
    fn test_prepare_rejects_invalid_input() {
        assert!(matches!(
            session_with_customer().prepare_phone_save("555-1234"),
            PhoneSave::Invalid(_)
        ));
    }

    #[test]
    fn test_prepare_requires_customer() {
        assert!(matches!(
            PageSession::new().prepare_phone_save("(555) 123-4567"),
            PhoneSave::Invalid(_)
        ));
    }

    #[test]
    fn test_prepare_submits_canonical_value() {
        assert_eq!(
            session_with_customer().prepare_phone_save("(555) 123-4567"),
            PhoneSave::Submit {
                customer_id: "cus_123".into(),
                phone: "+15551234567".into(),
            }
        );
    }

    #[test]
    fn test_unchanged_value_is_not_resubmitted() {
        let mut session = session_with_customer();
        session.begin_save();
        assert!(session.finish_save("+15551234567", Ok(())).is_some());

        assert_eq!(session.last_saved_phone(), Some("+15551234567"));
        assert_eq!(session.prepare_phone_save("555-123-4567"), PhoneSave::Skip);
        assert!(matches!(
            session.prepare_phone_save("555-123-9999"),
            PhoneSave::Submit { .. }
        ));
    }

    #[test]
    fn test_save_state_success_then_clear() {
        let mut session = session_with_customer();
        assert_eq!(session.save_state(), &SaveState::Idle);

        session.begin_save();
        assert!(session.save_state().is_submitting());

        let generation = session.finish_save("+15551234567", Ok(())).unwrap();
        assert_eq!(session.save_state(), &SaveState::Saved);
        assert_eq!(session.save_state().status_text(), Some("Saved"));

        session.clear_saved(generation);
        assert_eq!(session.save_state(), &SaveState::Idle);
    }

    #[test]
    fn test_earlier_timer_does_not_clear_later_save() {
        let mut session = session_with_customer();

        session.begin_save();
        let first = session.finish_save("+15551234567", Ok(())).unwrap();
        session.begin_save();
        let second = session.finish_save("+15559876543", Ok(())).unwrap();
        assert_ne!(first, second);

        session.clear_saved(first);
        assert_eq!(session.save_state(), &SaveState::Saved);

        session.clear_saved(second);
        assert_eq!(session.save_state(), &SaveState::Idle);
    }

    #[test]
    fn test_failure_persists_until_next_attempt() {
        let mut session = session_with_customer();
        session.begin_save();
        assert_eq!(session.finish_save("+15551234567", Err("No such customer".into())), None);

        assert_eq!(session.save_state(), &SaveState::Failed("No such customer".into()));
        assert_eq!(session.last_saved_phone(), None);

        // The saved-indicator timer must not wipe an error
        session.clear_saved(0);
        assert_eq!(session.save_state().status_text(), Some("No such customer"));

        session.begin_save();
        assert_eq!(session.save_state(), &SaveState::Submitting);
    }
}
