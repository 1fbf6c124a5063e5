use crate::state::SessionId;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::time::Duration;
use ulid::Ulid;

pub const SESSION_COOKIE: &str = "engagement_session";

pub fn current(jar: &CookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Ulid::from_string(cookie.value()).ok())
}

/// Returns the caller's session, minting a new one when the request carries
/// none. The cookie is (re)issued either way so its lifetime slides with use.
pub fn ensure(jar: CookieJar, ttl: Duration) -> (CookieJar, SessionId) {
    let id = current(&jar).unwrap_or_else(|| {
        let id = Ulid::new();
        tracing::debug!(session = %id, "starting session");
        id
    });
    (jar.add(session_cookie(id, ttl)), id)
}

/// Re-issues the cookie of an existing session without creating one.
pub fn refresh(jar: CookieJar, ttl: Duration) -> CookieJar {
    match current(&jar) {
        Some(id) => jar.add(session_cookie(id, ttl)),
        None => jar,
    }
}

pub fn clear(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

fn session_cookie(id: SessionId, ttl: Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::try_from(ttl).unwrap_or(time::Duration::MAX))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(1800);

    #[test]
    fn ensure_mints_once() {
        let (jar, id) = ensure(CookieJar::new(), TTL);
        assert_eq!(current(&jar), Some(id));

        let (jar, again) = ensure(jar, TTL);
        assert_eq!(again, id);
        assert_eq!(current(&jar), Some(id));
    }

    #[test]
    fn cookie_lifetime_matches_session_ttl() {
        let (jar, _) = ensure(CookieJar::new(), TTL);
        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(1800)));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn refresh_never_creates_a_session() {
        let jar = refresh(CookieJar::new(), TTL);
        assert_eq!(current(&jar), None);

        let (jar, id) = ensure(CookieJar::new(), Duration::from_secs(5));
        let jar = refresh(jar, TTL);
        assert_eq!(current(&jar), Some(id));
        assert_eq!(
            jar.get(SESSION_COOKIE).unwrap().max_age(),
            Some(time::Duration::seconds(1800))
        );
    }

    #[test]
    fn garbage_cookie_is_ignored() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-ulid"));
        assert_eq!(current(&jar), None);

        let (jar, id) = ensure(jar, TTL);
        assert_eq!(current(&jar), Some(id));
    }

    #[test]
    fn clear_forgets_session() {
        let (jar, _) = ensure(CookieJar::new(), TTL);
        assert_eq!(current(&clear(jar)), None);
    }
}
