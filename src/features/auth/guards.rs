//! Route authorization. Each protected route declares a static
//! [`RouteAccess`] requirement; the [`Protected`] wrapper evaluates it
//! against the session on every navigation and redirects when access is
//! denied. Client-side gating is UX only; the API enforces real access
//! control on every request.

use crate::components::Spinner;
use crate::features::auth::state::{Revalidation, use_session};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

/// Query parameter attached when redirecting an unverified identity.
pub(crate) const REDIRECT_REASON_PARAM: &str = "redirectReason";
pub(crate) const REASON_EMAIL_NOT_VERIFIED: &str = "emailNotVerified";

/// Per-route authorization requirement, attached at route-table construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteAccess {
    pub requires_auth: bool,
    pub requires_verification: bool,
}

impl RouteAccess {
    /// Signed-in identity required.
    pub const AUTHENTICATED: Self = Self {
        requires_auth: true,
        requires_verification: false,
    };

    /// Signed-in identity with a confirmed email address required.
    pub const VERIFIED: Self = Self {
        requires_auth: true,
        requires_verification: true,
    };
}

/// Outcome of evaluating a route requirement against the session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToProfile,
}

pub(crate) fn evaluate(
    access: RouteAccess,
    session_present: bool,
    email_verified: bool,
) -> RouteDecision {
    if !access.requires_auth {
        return RouteDecision::Allow;
    }
    if !session_present {
        return RouteDecision::RedirectToLogin;
    }
    if access.requires_verification && !email_verified {
        return RouteDecision::RedirectToProfile;
    }
    RouteDecision::Allow
}

/// Target for the unverified-identity redirect, carrying the reason code for
/// the profile view to display.
pub(crate) fn unverified_redirect() -> String {
    format!(
        "{}?{}={}",
        paths::PROFILE,
        REDIRECT_REASON_PARAM,
        REASON_EMAIL_NOT_VERIFIED
    )
}

/// Guards a route behind its [`RouteAccess`] requirement. A restored session
/// whose verification flag has not been confirmed this page lifetime is
/// revalidated first; while that is in flight the decision is deferred so a
/// stale flag never causes a premature redirect.
#[component]
pub fn Protected(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.session.get().is_some()
            && session.revalidation.get() == Revalidation::Stale
        {
            spawn_local(async move {
                // Failure clears the session; the decision effect redirects.
                let _ = session.restore_auth().await;
            });
        }
    });

    let decision = Signal::derive(move || {
        evaluate(
            access,
            session.session.get().is_some(),
            session.email_verified.get(),
        )
    });
    let settled = move || session.revalidation.get() != Revalidation::InFlight;

    Effect::new(move |_| {
        if !settled() {
            return;
        }
        match decision.get() {
            RouteDecision::Allow => {}
            RouteDecision::RedirectToLogin => navigate(paths::LOGIN, Default::default()),
            RouteDecision::RedirectToProfile => {
                navigate(&unverified_redirect(), Default::default());
            }
        }
    });

    view! {
        <Show
            when=move || settled() && decision.get() == RouteDecision::Allow
            fallback=|| view! { <Spinner /> }
        >
            {children()}
        </Show>
    }
}

/// Redirects signed-in identities away from guest-only routes (login and
/// password recovery) to the home route.
#[component]
pub fn RequireGuest(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.session.get().is_some() {
            navigate(paths::HOME, Default::default());
        }
    });

    view! {
        <Show when=move || session.session.get().is_none()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteAccess, RouteDecision, evaluate, unverified_redirect};

    const PUBLIC: RouteAccess = RouteAccess {
        requires_auth: false,
        requires_verification: false,
    };

    #[test]
    fn public_routes_are_always_allowed() {
        assert_eq!(evaluate(PUBLIC, false, false), RouteDecision::Allow);
        assert_eq!(evaluate(PUBLIC, true, true), RouteDecision::Allow);
    }

    #[test]
    fn missing_session_redirects_to_login() {
        assert_eq!(
            evaluate(RouteAccess::VERIFIED, false, false),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(
            evaluate(RouteAccess::AUTHENTICATED, false, false),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn unverified_session_redirects_to_profile() {
        assert_eq!(
            evaluate(RouteAccess::VERIFIED, true, false),
            RouteDecision::RedirectToProfile
        );
    }

    #[test]
    fn verified_session_is_allowed_through() {
        assert_eq!(
            evaluate(RouteAccess::VERIFIED, true, true),
            RouteDecision::Allow
        );
        assert_eq!(
            evaluate(RouteAccess::AUTHENTICATED, true, false),
            RouteDecision::Allow
        );
    }

    #[test]
    fn unverified_redirect_carries_the_reason_code() {
        assert_eq!(
            unverified_redirect(),
            "/profile?redirectReason=emailNotVerified"
        );
    }
}
