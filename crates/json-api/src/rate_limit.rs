//! Request rate limiting.

use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, Instant},
};

use salvo::{http::StatusError, prelude::*};

#[derive(Debug)]
struct Window {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window request limiter keyed by client address.
///
/// Counters live in process memory: they reset on restart and are not
/// shared between instances, so this is a best-effort guard in front of
/// the generation route, not an authoritative quota.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    #[must_use]
    pub(crate) fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    fn allow(&self, key: &str) -> bool {
        let now = Instant::now();

        // A poisoned lock fails open: dropping the guard entirely beats
        // refusing every request.
        let Ok(mut windows) = self.windows.lock() else {
            return true;
        };

        match windows.get_mut(key) {
            Some(window) if now < window.reset_at => {
                if window.count >= self.max_requests {
                    return false;
                }

                window.count += 1;

                true
            }
            _ => {
                windows.insert(
                    key.to_string(),
                    Window {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );

                true
            }
        }
    }
}

/// Client key: first hop of `x-forwarded-for` when present (the reverse
/// proxy case), otherwise the peer address.
fn client_key(req: &Request) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| req.remote_addr().to_string())
}

#[async_trait]
impl Handler for RateLimiter {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        if self.allow(&client_key(req)) {
            ctrl.call_next(req, depot, res).await;
        } else {
            res.render(
                StatusError::too_many_requests()
                    .brief("Rate limit exceeded. Please try again later."),
            );

            ctrl.skip_rest();
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use super::*;

    #[salvo::handler]
    async fn ok_handler(res: &mut Response) {
        res.render("ok");
    }

    fn make_service(limiter: RateLimiter) -> Service {
        Service::new(Router::new().hoop(limiter).get(ok_handler))
    }

    #[test]
    fn allow_counts_within_window() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));

        assert!(limiter.allow("10.0.0.1"), "first request should pass");
        assert!(limiter.allow("10.0.0.1"), "second request should pass");
        assert!(!limiter.allow("10.0.0.1"), "third request should be blocked");
    }

    #[test]
    fn allow_keys_clients_independently() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.allow("10.0.0.1"), "first client should pass");
        assert!(limiter.allow("10.0.0.2"), "second client should pass");
        assert!(!limiter.allow("10.0.0.1"), "first client should be blocked");
    }

    #[test]
    fn allow_resets_after_window_expires() {
        let limiter = RateLimiter::new(1, Duration::ZERO);

        assert!(limiter.allow("10.0.0.1"), "first request should pass");
        assert!(
            limiter.allow("10.0.0.1"),
            "expired window should reset the counter"
        );
    }

    #[tokio::test]
    async fn over_limit_requests_get_429() {
        let service = make_service(RateLimiter::new(1, Duration::from_secs(60)));

        let first = TestClient::get("http://example.com")
            .add_header("x-forwarded-for", "203.0.113.7", true)
            .send(&service)
            .await;
        let second = TestClient::get("http://example.com")
            .add_header("x-forwarded-for", "203.0.113.7", true)
            .send(&service)
            .await;

        assert_eq!(first.status_code, Some(StatusCode::OK));
        assert_eq!(second.status_code, Some(StatusCode::TOO_MANY_REQUESTS));
    }

    #[tokio::test]
    async fn separate_forwarded_clients_are_not_throttled_together() {
        let service = make_service(RateLimiter::new(1, Duration::from_secs(60)));

        let first = TestClient::get("http://example.com")
            .add_header("x-forwarded-for", "203.0.113.7", true)
            .send(&service)
            .await;
        let second = TestClient::get("http://example.com")
            .add_header("x-forwarded-for", "203.0.113.8", true)
            .send(&service)
            .await;

        assert_eq!(first.status_code, Some(StatusCode::OK));
        assert_eq!(second.status_code, Some(StatusCode::OK));
    }
}
