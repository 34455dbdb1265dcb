use std::{
    fmt,
    time::{Duration, Instant},
};

/// Cached bearer token and the instant it was obtained.
///
/// Both fields change together, only through [`Session::refresh`].
#[derive(Clone, Default)]
pub(crate) struct Session {
    token: String,
    last_refresh: Option<Instant>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &!self.token.is_empty())
            .field("last_refresh", &self.last_refresh)
            .finish()
    }
}

impl Session {
    /// True if no login happened yet or the token is older than `max_age`.
    pub(crate) fn is_stale(&self, now: Instant, max_age: Duration) -> bool {
        match self.last_refresh {
            None => true,
            Some(at) => now.saturating_duration_since(at) > max_age,
        }
    }

    pub(crate) fn refresh(&mut self, token: String, now: Instant) {
        self.token = token;
        self.last_refresh = Some(now);
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(60 * 60);

    #[test]
    fn unset_session_is_stale() {
        let s = Session::default();
        assert!(s.is_stale(Instant::now(), HOUR));
        assert_eq!(s.token(), "");
    }

    #[test]
    fn fresh_within_interval() {
        let t0 = Instant::now();
        let mut s = Session::default();
        s.refresh("abc".to_string(), t0);
        assert!(!s.is_stale(t0, HOUR));
        assert!(!s.is_stale(t0 + Duration::from_secs(59 * 60), HOUR));
        // Boundary: exactly one hour is still fresh.
        assert!(!s.is_stale(t0 + HOUR, HOUR));
    }

    #[test]
    fn stale_after_interval() {
        let t0 = Instant::now();
        let mut s = Session::default();
        s.refresh("abc".to_string(), t0);
        assert!(s.is_stale(t0 + HOUR + Duration::from_secs(1), HOUR));
    }

    #[test]
    fn refresh_replaces_token_and_timestamp() {
        let t0 = Instant::now();
        let mut s = Session::default();
        s.refresh("old".to_string(), t0);
        let t1 = t0 + HOUR * 2;
        s.refresh("new".to_string(), t1);
        assert_eq!(s.token(), "new");
        assert!(!s.is_stale(t1, HOUR));
    }

    #[test]
    fn debug_hides_token() {
        let mut s = Session::default();
        s.refresh("super-secret".to_string(), Instant::now());
        assert!(!format!("{s:?}").contains("super-secret"));
    }
}
